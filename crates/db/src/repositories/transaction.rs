//! Transaction repository: the atomic journal writer and its readers.

use ledgerline_core::ledger::{CandidateEntry, NewTransaction, TransactionStatus};
use ledgerline_shared::types::{OwnerId, TransactionId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, warn};

use super::error::RepositoryError;
use crate::entities::{journal_entries, transactions};

/// Transaction header with its entries.
#[derive(Debug, Clone)]
pub struct TransactionWithEntries {
    /// Transaction header.
    pub transaction: transactions::Model,
    /// Journal entries in insertion order.
    pub entries: Vec<journal_entries::Model>,
}

/// Transaction repository.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes a header and all of its entries in one database transaction.
    ///
    /// Commits only if every insert succeeds. On any failure the database
    /// transaction is rolled back and the original error is returned.
    ///
    /// # Errors
    ///
    /// Returns the database error that aborted the write.
    pub async fn persist(
        &self,
        input: &NewTransaction,
    ) -> Result<TransactionId, RepositoryError> {
        let txn = self.db.begin().await?;

        match Self::insert_all(&txn, input).await {
            Ok(id) => {
                txn.commit().await?;
                debug!(transaction_id = %id, entries = input.entries.len(), "Journal committed");
                Ok(id)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }

    async fn insert_all(
        txn: &DatabaseTransaction,
        input: &NewTransaction,
    ) -> Result<TransactionId, RepositoryError> {
        let header = Self::insert_header(txn, input).await?;
        for entry in &input.entries {
            Self::insert_entry(txn, header.id, header.owner_id, entry).await?;
        }
        Ok(TransactionId::from_db(header.id))
    }

    async fn insert_header(
        txn: &DatabaseTransaction,
        input: &NewTransaction,
    ) -> Result<transactions::Model, RepositoryError> {
        let header = transactions::ActiveModel {
            owner_id: Set(input.owner_id.get()),
            txn_type: Set(input.txn_type.as_str().to_string()),
            txn_date: Set(input.txn_date),
            description: Set(input.description.clone()),
            external_ref: Set(input.external_ref.clone()),
            status: Set(TransactionStatus::Posted.into()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        Ok(header.insert(txn).await?)
    }

    async fn insert_entry(
        txn: &DatabaseTransaction,
        transaction_id: i64,
        owner_id: i64,
        entry: &CandidateEntry,
    ) -> Result<journal_entries::Model, RepositoryError> {
        let row = journal_entries::ActiveModel {
            transaction_id: Set(transaction_id),
            owner_id: Set(owner_id),
            account_id: Set(entry.account_id.get()),
            category_id: Set(entry.category_id.map(|c| c.get())),
            side: Set(entry.side.into()),
            amount: Set(entry.amount.value()),
            note: Set(entry.note.clone()),
            ..Default::default()
        };

        Ok(row.insert(txn).await?)
    }

    /// Gets a transaction with its entries, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the transaction does not exist for this owner.
    pub async fn get_transaction(
        &self,
        owner_id: OwnerId,
        transaction_id: TransactionId,
    ) -> Result<TransactionWithEntries, RepositoryError> {
        let transaction = transactions::Entity::find_by_id(transaction_id.get())
            .filter(transactions::Column::OwnerId.eq(owner_id.get()))
            .one(&self.db)
            .await?
            .ok_or(RepositoryError::NotFound {
                entity: "transaction",
                id: transaction_id.get(),
            })?;

        let entries = journal_entries::Entity::find()
            .filter(journal_entries::Column::TransactionId.eq(transaction.id))
            .filter(journal_entries::Column::OwnerId.eq(owner_id.get()))
            .order_by_asc(journal_entries::Column::Id)
            .all(&self.db)
            .await?;

        Ok(TransactionWithEntries {
            transaction,
            entries,
        })
    }

    /// Counts the entries stored for a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_entries(&self, transaction_id: TransactionId) -> Result<u64, RepositoryError> {
        let count = journal_entries::Entity::find()
            .filter(journal_entries::Column::TransactionId.eq(transaction_id.get()))
            .count(&self.db)
            .await?;
        Ok(count)
    }
}
