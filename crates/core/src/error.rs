//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failure reported to a ledger caller.
///
/// The first three variants are business-rule rejections: deterministic,
/// synchronous, and guaranteed to leave balance and history untouched.
/// Callers branch on them as ordinary control flow. `Storage` is the only
/// variant that signals a fault rather than a rejection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The requested amount is not a positive number of points.
    #[error("amount must be positive, got {0}")]
    InvalidAmount(u64),

    /// Charging would push the balance above the cap.
    #[error("charge of {amount} on balance {balance} exceeds cap {max}")]
    BalanceCapExceeded { balance: u64, amount: u64, max: u64 },

    /// Using would drive the balance negative.
    #[error("insufficient balance: {balance} available, {amount} requested")]
    InsufficientBalance { balance: u64, amount: u64 },

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The backing store failed (poisoned lock, backend fault).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl LedgerError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// True for deterministic business-rule rejections, false for faults.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::BalanceCapExceeded { .. }
                | Self::InsufficientBalance { .. }
        )
    }
}
