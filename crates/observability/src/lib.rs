//! Tracing/logging setup shared by the workspace.

pub mod tracing;

pub use self::tracing::{init, init_with_filter};
