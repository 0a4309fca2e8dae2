//! `SeaORM`-backed [`LedgerStore`].

use async_trait::async_trait;
use ledgerline_core::ledger::{LedgerStore, NewTransaction, StoreError};
use ledgerline_shared::types::{AccountId, OwnerId, TransactionId};
use sea_orm::DatabaseConnection;

use crate::repositories::{AccountRepository, RepositoryError, TransactionRepository};

/// Ledger store over a pooled database connection.
#[derive(Debug, Clone)]
pub struct SeaOrmLedgerStore {
    accounts: AccountRepository,
    transactions: TransactionRepository,
}

impl SeaOrmLedgerStore {
    /// Creates a store sharing `db` between its repositories.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            accounts: AccountRepository::new(db.clone()),
            transactions: TransactionRepository::new(db),
        }
    }

    /// Returns the transaction repository, for reading back posted journals.
    #[must_use]
    pub const fn transactions(&self) -> &TransactionRepository {
        &self.transactions
    }
}

/// Unwraps database errors so callers can downcast to `DbErr` directly.
fn into_store_error(err: RepositoryError) -> StoreError {
    match err {
        RepositoryError::Database(db) => Box::new(db),
        other => Box::new(other),
    }
}

#[async_trait]
impl LedgerStore for SeaOrmLedgerStore {
    async fn count_owned_active_accounts(
        &self,
        owner_id: OwnerId,
        account_ids: &[AccountId],
    ) -> Result<u64, StoreError> {
        self.accounts
            .count_owned_active(owner_id, account_ids)
            .await
            .map_err(into_store_error)
    }

    async fn persist(&self, transaction: &NewTransaction) -> Result<TransactionId, StoreError> {
        self.transactions
            .persist(transaction)
            .await
            .map_err(into_store_error)
    }
}
