pub mod application;
pub mod document;
pub mod error;
pub mod flag;
pub mod package;
pub mod runtime;

pub use error::Error;
