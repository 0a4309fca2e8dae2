//! Storage collaborator used by the posting service.

use async_trait::async_trait;
use ledgerline_shared::types::{AccountId, OwnerId, TransactionId};

use super::types::NewTransaction;

/// Error produced by a storage backend, passed through unchanged.
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What the posting engine needs from the data store.
///
/// Implementations must make [`LedgerStore::persist`] atomic: either the
/// header and every entry become visible together, or nothing does.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Counts how many of `account_ids` exist, are active, and belong to
    /// `owner_id`. `account_ids` contains no duplicates.
    async fn count_owned_active_accounts(
        &self,
        owner_id: OwnerId,
        account_ids: &[AccountId],
    ) -> Result<u64, StoreError>;

    /// Writes the transaction header and its entries in one storage
    /// transaction and returns the generated id.
    async fn persist(&self, transaction: &NewTransaction) -> Result<TransactionId, StoreError>;
}
