use serde_yaml::{Mapping, Number, Value};

use super::PackageSpec;
use crate::flag::is_truthy;

/// Read-only view of one package list entry.
///
/// Fields are looked up lazily on the borrowed mapping. Missing or
/// unusable fields read as empty strings instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    fields: &'a Mapping,
}

impl<'a> Entry<'a> {
    /// Wrap a YAML node, or `None` if it is not a mapping.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_mapping().map(|fields| Self { fields })
    }

    pub fn url(&self) -> String {
        self.text("url")
    }

    pub fn name(&self) -> String {
        self.text("name")
    }

    pub fn version(&self) -> String {
        self.text("version")
    }

    /// Whether the entry should be installed on `os_key`.
    ///
    /// Without an `os` mapping the entry applies everywhere. With one, the
    /// flag stored under `os_key` decides, and a missing key means no.
    pub fn applies_to(&self, os_key: &str) -> bool {
        match self.fields.get("os").and_then(Value::as_mapping) {
            None => true,
            Some(os) => os.get(os_key).is_some_and(is_truthy),
        }
    }

    pub fn spec(&self) -> Option<PackageSpec> {
        PackageSpec::from_fields(&self.url(), &self.name(), &self.version())
    }

    // Numbers keep their YAML spelling so `version: 2` still pins.
    // Zero, NaN and infinities count as unset.
    fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(text)) => text.trim().to_string(),
            Some(Value::Number(number)) if is_meaningful(number) => number.to_string(),
            _ => String::new(),
        }
    }
}

fn is_meaningful(number: &Number) -> bool {
    number
        .as_f64()
        .is_some_and(|value| value.is_finite() && value != 0.0)
}
