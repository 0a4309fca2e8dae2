//! In-memory [`LedgerStore`] used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use ledgerline_shared::types::{AccountId, OwnerId, TransactionId};

use super::store::{LedgerStore, StoreError};
use super::types::NewTransaction;

#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    accounts: Mutex<HashMap<AccountId, (OwnerId, bool)>>,
    transactions: Mutex<Vec<NewTransaction>>,
    fail_writes: AtomicBool,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&self, owner_id: OwnerId, account_id: AccountId, is_active: bool) {
        self.accounts
            .lock()
            .unwrap()
            .insert(account_id, (owner_id, is_active));
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn transactions(&self) -> Vec<NewTransaction> {
        self.transactions.lock().unwrap().clone()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn count_owned_active_accounts(
        &self,
        owner_id: OwnerId,
        account_ids: &[AccountId],
    ) -> Result<u64, StoreError> {
        let accounts = self.accounts.lock().unwrap();
        let count = account_ids
            .iter()
            .filter(|id| {
                accounts
                    .get(id)
                    .is_some_and(|(owner, active)| *owner == owner_id && *active)
            })
            .count();
        Ok(count as u64)
    }

    async fn persist(&self, transaction: &NewTransaction) -> Result<TransactionId, StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err("disk full".into());
        }
        let mut transactions = self.transactions.lock().unwrap();
        transactions.push(transaction.clone());
        Ok(TransactionId::from_db(transactions.len() as i64))
    }
}
