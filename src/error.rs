//! Errors that map to a dedicated process exit code.
//!
//! Anything not listed here is reported through `anyhow` and exits with
//! [`EXIT_FAILURE`].

use std::path::PathBuf;
use thiserror::Error;

/// Bad invocation or any unclassified runtime failure.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not find YAML file: {}", .path.display())]
    ConfigNotFound { path: PathBuf },
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigNotFound { .. } => 3,
        }
    }
}
