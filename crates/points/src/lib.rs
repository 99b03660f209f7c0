//! `tally-points` — pure point-balance domain.
//!
//! Balance arithmetic, validation rules, and the transaction record types.
//! No storage or locking here; that lives in `tally-ledger`.

pub mod balance;
pub mod transaction;

pub use balance::{BalanceSnapshot, MAX_BALANCE, balance_after_charge, balance_after_use};
pub use transaction::{TransactionKind, TransactionRecord};
