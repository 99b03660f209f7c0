//! Pluggable storage boundary for balances and history.
//!
//! This module defines the two collaborator interfaces the ledger service
//! consumes, without making any storage assumptions. A durable backend
//! plugs in here; the service's locking and validation never change.

pub mod in_memory;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use tally_core::{AccountId, LedgerError};
use tally_points::{BalanceSnapshot, TransactionKind, TransactionRecord};

pub use in_memory::{InMemoryAccountStore, InMemoryHistoryLog};

/// Storage-level failure, distinct from business-rule rejections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An internal lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,

    /// A pluggable backend failed.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

/// Current balance per account.
///
/// `read` treats absence as balance 0, never as an error. The store does
/// not enforce balance invariants; callers write pre-validated values from
/// inside the account's critical section, so the store stays a dumb
/// key→value map plus an update timestamp.
pub trait AccountStore: Send + Sync {
    fn read(&self, account_id: AccountId) -> Result<u64, StoreError>;

    /// Unconditionally set the balance, returning the updated snapshot.
    fn write(&self, account_id: AccountId, balance: u64) -> Result<BalanceSnapshot, StoreError>;
}

/// Append-only transaction history, one stream per account.
pub trait HistoryLog: Send + Sync {
    /// Create and store a new record with a fresh process-wide monotonic id.
    fn append(
        &self,
        account_id: AccountId,
        amount: u64,
        kind: TransactionKind,
        occurred_at: DateTime<Utc>,
    ) -> Result<TransactionRecord, StoreError>;

    /// All records for the account in append order; empty if none exist.
    fn select_all(&self, account_id: AccountId) -> Result<Vec<TransactionRecord>, StoreError>;
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore + ?Sized,
{
    fn read(&self, account_id: AccountId) -> Result<u64, StoreError> {
        (**self).read(account_id)
    }

    fn write(&self, account_id: AccountId, balance: u64) -> Result<BalanceSnapshot, StoreError> {
        (**self).write(account_id, balance)
    }
}

impl<S> HistoryLog for Arc<S>
where
    S: HistoryLog + ?Sized,
{
    fn append(
        &self,
        account_id: AccountId,
        amount: u64,
        kind: TransactionKind,
        occurred_at: DateTime<Utc>,
    ) -> Result<TransactionRecord, StoreError> {
        (**self).append(account_id, amount, kind, occurred_at)
    }

    fn select_all(&self, account_id: AccountId) -> Result<Vec<TransactionRecord>, StoreError> {
        (**self).select_all(account_id)
    }
}
