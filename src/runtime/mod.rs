//! Runtime abstraction for system operations.
//!
//! Everything the resolver needs from the host goes through [`Runtime`], so
//! path resolution and document loading can be tested against a mock.
//!
//! # Structure
//!
//! - `path` - Pure path helpers (home expansion, lexical normalization)
//! - `env` - Home and working directory lookup
//! - `fs` - File reads and canonicalization

mod env;
mod fs;
pub mod path;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use path::{expand_home, normalize_path};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime {
    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Canonicalize a path by resolving all symlinks and returning the canonical absolute path.
    /// Fails when the path does not exist.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    // Directories
    fn home_dir(&self) -> Option<PathBuf>;
    fn current_dir(&self) -> Result<PathBuf>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.canonicalize_impl(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir_impl()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }
}
