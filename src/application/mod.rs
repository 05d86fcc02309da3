//! Application layer - use cases coordinating document loading and selection.
//!
//! The CLI layer parses arguments and hands them to these actions; nothing in
//! here knows about process exit codes.

mod resolve;

pub use resolve::{ResolveAction, ResolveOptions};
