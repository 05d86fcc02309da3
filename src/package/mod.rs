//! Package list handling
//!
//! This module turns the raw YAML entries of a package list into the
//! specifiers handed to a package installer: OS filtering, field extraction
//! and formatting.

mod entry;
mod select;
mod spec;

pub use entry::Entry;
pub use select::select_specs;
pub use spec::PackageSpec;
