//! In-memory reference stores.
//!
//! Intended for tests/dev and as the reference backend. Not optimized for
//! performance; a durable implementation replaces these behind the same
//! traits.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use tally_core::{AccountId, RecordId};
use tally_points::{BalanceSnapshot, TransactionKind, TransactionRecord};

use super::{AccountStore, HistoryLog, StoreError};

#[derive(Debug, Clone, Copy)]
struct AccountRow {
    balance: u64,
    updated_at: DateTime<Utc>,
}

/// In-memory balance map.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    rows: RwLock<HashMap<AccountId, AccountRow>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn read(&self, account_id: AccountId) -> Result<u64, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Poisoned)?;
        Ok(rows.get(&account_id).map(|r| r.balance).unwrap_or(0))
    }

    fn write(&self, account_id: AccountId, balance: u64) -> Result<BalanceSnapshot, StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::Poisoned)?;
        let updated_at = Utc::now();
        rows.insert(
            account_id,
            AccountRow {
                balance,
                updated_at,
            },
        );
        Ok(BalanceSnapshot {
            account_id,
            balance,
            updated_at,
        })
    }
}

/// In-memory append-only history log.
#[derive(Debug, Default)]
pub struct InMemoryHistoryLog {
    streams: RwLock<HashMap<AccountId, Vec<TransactionRecord>>>,
    next_record_id: AtomicU64,
}

impl InMemoryHistoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryLog for InMemoryHistoryLog {
    fn append(
        &self,
        account_id: AccountId,
        amount: u64,
        kind: TransactionKind,
        occurred_at: DateTime<Utc>,
    ) -> Result<TransactionRecord, StoreError> {
        let mut streams = self.streams.write().map_err(|_| StoreError::Poisoned)?;

        // Drawing the id while holding the stream write lock keeps record
        // ids monotonic in append order across all accounts.
        let id = RecordId::new(self.next_record_id.fetch_add(1, Ordering::Relaxed) + 1);
        let record = TransactionRecord {
            id,
            account_id,
            amount,
            kind,
            occurred_at,
        };
        streams.entry(account_id).or_default().push(record.clone());

        Ok(record)
    }

    fn select_all(&self, account_id: AccountId) -> Result<Vec<TransactionRecord>, StoreError> {
        let streams = self.streams.read().map_err(|_| StoreError::Poisoned)?;
        Ok(streams.get(&account_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn unknown_account_reads_as_zero() {
        let store = InMemoryAccountStore::new();
        assert_eq!(store.read(AccountId::new(22)).unwrap(), 0);
    }

    #[test]
    fn write_returns_the_stored_snapshot() {
        let store = InMemoryAccountStore::new();
        let snapshot = store.write(AccountId::new(1), 10_000).unwrap();
        assert_eq!(snapshot.account_id, AccountId::new(1));
        assert_eq!(snapshot.balance, 10_000);
        assert_eq!(store.read(AccountId::new(1)).unwrap(), 10_000);
    }

    #[test]
    fn write_overwrites_the_previous_balance() {
        let store = InMemoryAccountStore::new();
        store.write(AccountId::new(1), 10_000).unwrap();
        let snapshot = store.write(AccountId::new(1), 500).unwrap();
        assert_eq!(snapshot.balance, 500);
        assert_eq!(store.read(AccountId::new(1)).unwrap(), 500);
    }

    #[test]
    fn unknown_account_has_empty_history() {
        let log = InMemoryHistoryLog::new();
        assert!(log.select_all(AccountId::new(5)).unwrap().is_empty());
    }

    #[test]
    fn append_keeps_insertion_order_per_account() {
        let log = InMemoryHistoryLog::new();
        let account = AccountId::new(1);
        log.append(account, 100, TransactionKind::Charge, test_time())
            .unwrap();
        log.append(account, 40, TransactionKind::Use, test_time())
            .unwrap();

        let records = log.select_all(account).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, TransactionKind::Charge);
        assert_eq!(records[0].amount, 100);
        assert_eq!(records[1].kind, TransactionKind::Use);
        assert_eq!(records[1].amount, 40);
        assert!(records.iter().all(|r| r.account_id == account));
    }

    #[test]
    fn record_ids_are_monotonic_across_accounts() {
        let log = InMemoryHistoryLog::new();
        let a = log
            .append(AccountId::new(1), 10, TransactionKind::Charge, test_time())
            .unwrap();
        let b = log
            .append(AccountId::new(2), 20, TransactionKind::Charge, test_time())
            .unwrap();
        let c = log
            .append(AccountId::new(1), 5, TransactionKind::Use, test_time())
            .unwrap();

        assert!(a.id < b.id);
        assert!(b.id < c.id);
    }

    #[test]
    fn histories_do_not_leak_across_accounts() {
        let log = InMemoryHistoryLog::new();
        log.append(AccountId::new(1), 10, TransactionKind::Charge, test_time())
            .unwrap();
        log.append(AccountId::new(2), 20, TransactionKind::Charge, test_time())
            .unwrap();

        let records = log.select_all(AccountId::new(1)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].account_id, AccountId::new(1));
    }
}
