//! Ledger service: validation plus the per-account critical section.

use chrono::{DateTime, Utc};
use tracing::debug;

use tally_core::{AccountId, LedgerResult};
use tally_points::{
    BalanceSnapshot, TransactionKind, TransactionRecord, balance_after_charge, balance_after_use,
};

use crate::locks::AccountLockRegistry;
use crate::store::{AccountStore, HistoryLog, InMemoryAccountStore, InMemoryHistoryLog, StoreError};

/// Orchestrates charge/use operations over an account store and a history
/// log.
///
/// Every accepted operation runs read → validate → write → append as one
/// critical section under its account's mutex, so concurrent operations on
/// the same account serialize and none of them can act on a stale balance.
/// Operations on distinct accounts never block each other. `balance` and
/// `history` skip the lock entirely; they may return a value that is stale
/// by the time the caller observes it.
pub struct LedgerService<A, H> {
    accounts: A,
    history: H,
    locks: AccountLockRegistry,
}

impl LedgerService<InMemoryAccountStore, InMemoryHistoryLog> {
    /// Service backed by the in-memory reference stores.
    pub fn in_memory() -> Self {
        Self::new(InMemoryAccountStore::new(), InMemoryHistoryLog::new())
    }
}

impl<A, H> LedgerService<A, H>
where
    A: AccountStore,
    H: HistoryLog,
{
    pub fn new(accounts: A, history: H) -> Self {
        Self {
            accounts,
            history,
            locks: AccountLockRegistry::new(),
        }
    }

    /// Add `amount` points to the account.
    ///
    /// Rejects with `InvalidAmount` for a zero amount and with
    /// `BalanceCapExceeded` when the result would pass `MAX_BALANCE`;
    /// rejected calls mutate nothing and append nothing.
    pub fn charge(
        &self,
        account_id: AccountId,
        amount: u64,
        requested_at: DateTime<Utc>,
    ) -> LedgerResult<BalanceSnapshot> {
        self.apply(account_id, amount, TransactionKind::Charge, requested_at)
    }

    /// Spend `amount` points from the account.
    ///
    /// Rejects with `InvalidAmount` for a zero amount and with
    /// `InsufficientBalance` when the account holds fewer points than
    /// requested. (`use` is a keyword; history records keep the `Use`
    /// kind.)
    pub fn use_points(
        &self,
        account_id: AccountId,
        amount: u64,
        requested_at: DateTime<Utc>,
    ) -> LedgerResult<BalanceSnapshot> {
        self.apply(account_id, amount, TransactionKind::Use, requested_at)
    }

    fn apply(
        &self,
        account_id: AccountId,
        amount: u64,
        kind: TransactionKind,
        requested_at: DateTime<Utc>,
    ) -> LedgerResult<BalanceSnapshot> {
        let lock = self.locks.lock_for(account_id)?;
        let guard = lock.lock().map_err(|_| StoreError::Poisoned)?;

        let balance = self.accounts.read(account_id)?;
        let next = match kind {
            TransactionKind::Charge => balance_after_charge(balance, amount)?,
            TransactionKind::Use => balance_after_use(balance, amount)?,
        };

        let snapshot = self.accounts.write(account_id, next)?;
        self.history.append(account_id, amount, kind, requested_at)?;
        drop(guard);

        debug!(
            account = %account_id,
            amount,
            kind = ?kind,
            balance = snapshot.balance,
            "operation applied"
        );
        Ok(snapshot)
    }

    /// Current balance; 0 for accounts never seen.
    pub fn balance(&self, account_id: AccountId) -> LedgerResult<u64> {
        Ok(self.accounts.read(account_id)?)
    }

    /// All accepted transactions for the account, oldest first; empty for
    /// accounts never seen.
    pub fn history(&self, account_id: AccountId) -> LedgerResult<Vec<TransactionRecord>> {
        Ok(self.history.select_all(account_id)?)
    }

    /// Test hook: concurrency tests pin down lock sharing through this.
    #[cfg(test)]
    pub(crate) fn lock_registry(&self) -> &AccountLockRegistry {
        &self.locks
    }
}
