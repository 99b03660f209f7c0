//! Transaction history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{AccountId, RecordId};

/// Direction of a balance change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Charge,
    Use,
}

/// One accepted balance change. Immutable once appended; records are never
/// updated, merged, or reassigned to another account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Assigned by the history log; monotonic across all accounts.
    pub id: RecordId,
    pub account_id: AccountId,
    /// Unsigned magnitude; the sign lives in `kind`.
    pub amount: u64,
    pub kind: TransactionKind,
    /// Caller-supplied request time, not validated for monotonicity.
    pub occurred_at: DateTime<Utc>,
}
