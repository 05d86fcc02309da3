//! Resolve action - prints the package specs that apply to one OS.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::document::{DEFAULT_SECTION, Document, resolve_path};
use crate::package::select_specs;
use crate::runtime::Runtime;

/// Options for a single resolve run
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Host-tools YAML file, as given on the command line
    pub config: PathBuf,
    /// Operating system key looked up in each entry's `os` mapping
    pub os_key: String,
    /// Top-level key holding the package list
    pub section: String,
}

impl ResolveOptions {
    pub fn new(config: impl Into<PathBuf>, os_key: impl Into<String>) -> Self {
        Self {
            config: config.into(),
            os_key: os_key.into(),
            section: DEFAULT_SECTION.to_string(),
        }
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }
}

/// Resolve action - loads the document and writes one spec per line
pub struct ResolveAction<'a, R: Runtime> {
    runtime: &'a R,
}

impl<'a, R: Runtime> ResolveAction<'a, R> {
    pub fn new(runtime: &'a R) -> Self {
        Self { runtime }
    }

    /// Write the selected specs to `out`, returning how many were written.
    #[tracing::instrument(skip(self, out))]
    pub fn run<W: Write>(&self, options: &ResolveOptions, out: &mut W) -> Result<usize> {
        let path = resolve_path(self.runtime, &options.config)?;
        let document = Document::load(self.runtime, &path)?;
        let os_key = options.os_key.trim();

        let mut written = 0;
        for spec in select_specs(document.packages(&options.section), os_key) {
            writeln!(out, "{}", spec).context("Failed to write package spec")?;
            written += 1;
        }
        out.flush().context("Failed to flush output")?;

        info!(
            "Resolved {} package(s) from '{}' in {} for {:?}",
            written,
            options.section,
            path.display(),
            os_key
        );
        Ok(written)
    }
}
