use log::debug;
use serde_yaml::Value;

use super::{Entry, PackageSpec};

/// Lazily resolve package entries into specifiers for `os_key`.
///
/// Output order follows input order. Entries that are not mappings, are
/// disabled for `os_key`, or carry neither `url` nor `name` are skipped.
pub fn select_specs<'a>(
    entries: &'a [Value],
    os_key: &'a str,
) -> impl Iterator<Item = PackageSpec> + 'a {
    entries.iter().enumerate().filter_map(move |(index, raw)| {
        let Some(entry) = Entry::from_value(raw) else {
            debug!("Skipping entry #{}: not a mapping", index);
            return None;
        };

        if !entry.applies_to(os_key) {
            debug!("Skipping entry #{}: not enabled for {:?}", index, os_key);
            return None;
        }

        let spec = entry.spec();
        if spec.is_none() {
            debug!("Skipping entry #{}: no url or name", index);
        }
        spec
    })
}
