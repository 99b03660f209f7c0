//! `tally-core` — ledger foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage or locking
//! concerns): strongly-typed identifiers and the error model shared by the
//! rest of the workspace.

pub mod error;
pub mod id;

pub use error::{LedgerError, LedgerResult};
pub use id::{AccountId, RecordId};
