//! Loading of the host-tools YAML document.

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use serde_yaml::{Mapping, Value};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::runtime::{Runtime, expand_home, normalize_path};

/// Top-level key holding the Python package list.
pub const DEFAULT_SECTION: &str = "python_packages";

/// Parsed host-tools document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Parse YAML text.
    ///
    /// Empty and "falsy" documents (`~`, `false`, `0`, `""`, `[]`) are treated
    /// as an empty mapping. Any other non-mapping root is an error.
    ///
    /// `<<` merge keys are expanded, so entries may share fields through
    /// anchors. A mapping that repeats a key is rejected rather than keeping
    /// the last value.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut value: Value = serde_yaml::from_str(text).context("Failed to parse YAML")?;
        value.apply_merge().context("Failed to parse YAML")?;
        match value {
            Value::Mapping(root) => Ok(Self { root }),
            other if is_falsy(&other) => Ok(Self::default()),
            other => bail!(
                "Expected a mapping at the top of the document, found {}",
                kind(&other)
            ),
        }
    }

    /// Read and parse the document at an already resolved `path`.
    ///
    /// A missing file is reported as [`Error::ConfigNotFound`]. Every other
    /// read failure (permissions, a directory) is passed through unchanged.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let text = match runtime.read_to_string(path) {
            Ok(text) => text,
            Err(err) if is_not_found(&err) => {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                }
                .into());
            }
            Err(err) => return Err(err),
        };
        debug!("Read {} bytes from {}", text.len(), path.display());
        Self::parse(&text).with_context(|| format!("Invalid YAML in {}", path.display()))
    }

    /// Entries of the package list stored under `section`.
    ///
    /// Absent, null or non-sequence values give an empty list.
    pub fn packages(&self, section: &str) -> &[Value] {
        match self.root.get(section) {
            Some(Value::Sequence(entries)) => entries.as_slice(),
            Some(Value::Null) | None => &[],
            Some(other) => {
                warn!(
                    "Ignoring '{}': expected a list of packages, found {}",
                    section,
                    kind(other)
                );
                &[]
            }
        }
    }
}

/// Turn a user-supplied path into an absolute one.
///
/// A leading `~` is expanded and relative paths are taken from the current
/// directory. The result is canonicalized when possible; otherwise it is only
/// normalized lexically so the not-found message still shows a clean path.
#[tracing::instrument(skip(runtime))]
pub fn resolve_path<R: Runtime>(runtime: &R, raw: &Path) -> Result<PathBuf> {
    let expanded = expand_home(raw, runtime.home_dir().as_deref());
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        runtime.current_dir()?.join(expanded)
    };

    match runtime.canonicalize(&absolute) {
        Ok(canonical) => Ok(canonical),
        Err(err) => {
            debug!("Keeping {} as given: {:#}", absolute.display(), err);
            Ok(normalize_path(&absolute))
        }
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::String(text) => text.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Number(number) => number.as_f64() == Some(0.0),
        _ => false,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
