//! Per-account mutual exclusion.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use tally_core::AccountId;

use crate::store::StoreError;

/// Registry of one mutex per account, created lazily on first access.
///
/// Two callers racing on a previously-unseen account must end up sharing
/// exactly one lock instance; `entry().or_default()` under the map's write
/// lock guarantees that. Once an account's mutex exists, lookups take the
/// read path, so traffic on one account never serializes traffic on
/// another.
#[derive(Debug, Default)]
pub struct AccountLockRegistry {
    locks: RwLock<HashMap<AccountId, Arc<Mutex<()>>>>,
}

impl AccountLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock instance for `account_id`, creating it on first access.
    pub fn lock_for(&self, account_id: AccountId) -> Result<Arc<Mutex<()>>, StoreError> {
        {
            let locks = self.locks.read().map_err(|_| StoreError::Poisoned)?;
            if let Some(lock) = locks.get(&account_id) {
                return Ok(Arc::clone(lock));
            }
        }

        let mut locks = self.locks.write().map_err(|_| StoreError::Poisoned)?;
        Ok(Arc::clone(locks.entry(account_id).or_default()))
    }
}
