//! Balance arithmetic and the cap/floor validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{AccountId, LedgerError, LedgerResult};

/// Upper bound a balance may never exceed.
pub const MAX_BALANCE: u64 = 1_000_000;

/// Point-in-time view of one account's balance.
///
/// `updated_at` is stamped by the account store when the balance is
/// written; it is unrelated to the caller-supplied transaction timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub account_id: AccountId,
    pub balance: u64,
    pub updated_at: DateTime<Utc>,
}

/// Balance after charging `amount`, or the rejection forbidding it.
///
/// Performed with `checked_add`: an addition that overflows `u64` cannot
/// land within the cap, so it reports `BalanceCapExceeded` instead of
/// wrapping.
pub fn balance_after_charge(balance: u64, amount: u64) -> LedgerResult<u64> {
    require_positive(amount)?;
    match balance.checked_add(amount) {
        Some(next) if next <= MAX_BALANCE => Ok(next),
        _ => Err(LedgerError::BalanceCapExceeded {
            balance,
            amount,
            max: MAX_BALANCE,
        }),
    }
}

/// Balance after using `amount`, or the rejection forbidding it.
pub fn balance_after_use(balance: u64, amount: u64) -> LedgerResult<u64> {
    require_positive(amount)?;
    balance
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientBalance { balance, amount })
}

fn require_positive(amount: u64) -> LedgerResult<()> {
    if amount == 0 {
        return Err(LedgerError::InvalidAmount(amount));
    }
    Ok(())
}
