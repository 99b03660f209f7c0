//! `tally-ledger` — the concurrency-safe ledger core.
//!
//! Orchestrates charge/use operations over pluggable stores, holding one
//! critical section per account so same-account operations serialize while
//! distinct accounts proceed in parallel.

pub mod locks;
pub mod service;
pub mod store;


pub use locks::AccountLockRegistry;
pub use service::LedgerService;
pub use store::{AccountStore, HistoryLog, InMemoryAccountStore, InMemoryHistoryLog, StoreError};
