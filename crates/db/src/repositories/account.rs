//! Account repository for chart of accounts operations.

use ledgerline_core::ledger::AccountType;
use ledgerline_shared::types::{AccountId, OwnerId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use super::error::RepositoryError;
use crate::entities::accounts;

/// Currency given to accounts that do not name one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Owner of the account.
    pub owner_id: OwnerId,
    /// Display name.
    pub name: String,
    /// Optional short code.
    pub code: Option<String>,
    /// Account classification.
    pub account_type: AccountType,
    /// ISO currency code; the repository default when absent.
    pub currency: Option<String>,
    /// Parent account in the same owner's tree.
    pub parent_account_id: Option<AccountId>,
    /// Free-form metadata.
    pub metadata: Option<serde_json::Value>,
}

impl CreateAccountInput {
    /// Creates an input with only the required fields set.
    #[must_use]
    pub fn new(owner_id: OwnerId, name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            owner_id,
            name: name.into(),
            code: None,
            account_type,
            currency: None,
            parent_account_id: None,
            metadata: None,
        }
    }
}

/// Account repository.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
    default_currency: String,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Overrides the currency used when an input has none.
    #[must_use]
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent account does not exist or belongs to
    /// a different owner, or if the insert fails.
    pub async fn create_account(
        &self,
        input: CreateAccountInput,
    ) -> Result<accounts::Model, RepositoryError> {
        if let Some(parent_id) = input.parent_account_id {
            let parent = accounts::Entity::find_by_id(parent_id.get())
                .one(&self.db)
                .await?;

            match parent {
                None => {
                    return Err(RepositoryError::ParentNotFound {
                        entity: "account",
                        id: parent_id.get(),
                    });
                }
                Some(p) if p.owner_id != input.owner_id.get() => {
                    return Err(RepositoryError::ParentWrongOwner("account"));
                }
                _ => {}
            }
        }

        let account = accounts::ActiveModel {
            owner_id: Set(input.owner_id.get()),
            name: Set(input.name),
            code: Set(input.code),
            account_type: Set(input.account_type.into()),
            currency: Set(input
                .currency
                .unwrap_or_else(|| self.default_currency.clone())),
            parent_account_id: Set(input.parent_account_id.map(AccountId::get)),
            is_active: Set(true),
            metadata: Set(input.metadata),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let account = account.insert(&self.db).await?;
        debug!(account_id = account.id, owner_id = account.owner_id, "Account created");
        Ok(account)
    }

    /// Gets an account by id, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the account does not exist for this owner.
    pub async fn get_account(
        &self,
        owner_id: OwnerId,
        account_id: AccountId,
    ) -> Result<accounts::Model, RepositoryError> {
        accounts::Entity::find_by_id(account_id.get())
            .filter(accounts::Column::OwnerId.eq(owner_id.get()))
            .one(&self.db)
            .await?
            .ok_or(RepositoryError::NotFound {
                entity: "account",
                id: account_id.get(),
            })
    }

    /// Lists an owner's accounts in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_accounts(
        &self,
        owner_id: OwnerId,
    ) -> Result<Vec<accounts::Model>, RepositoryError> {
        let accounts = accounts::Entity::find()
            .filter(accounts::Column::OwnerId.eq(owner_id.get()))
            .order_by_asc(accounts::Column::Id)
            .all(&self.db)
            .await?;
        Ok(accounts)
    }

    /// Activates or deactivates an account.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the account does not exist for this owner.
    pub async fn set_active(
        &self,
        owner_id: OwnerId,
        account_id: AccountId,
        is_active: bool,
    ) -> Result<accounts::Model, RepositoryError> {
        let account = self.get_account(owner_id, account_id).await?;
        let mut active: accounts::ActiveModel = account.into();
        active.is_active = Set(is_active);
        Ok(active.update(&self.db).await?)
    }

    /// Counts how many of `account_ids` exist, are active and belong to
    /// `owner_id`, in one query.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_owned_active(
        &self,
        owner_id: OwnerId,
        account_ids: &[AccountId],
    ) -> Result<u64, RepositoryError> {
        if account_ids.is_empty() {
            return Ok(0);
        }

        let count = accounts::Entity::find()
            .filter(accounts::Column::OwnerId.eq(owner_id.get()))
            .filter(accounts::Column::IsActive.eq(true))
            .filter(accounts::Column::Id.is_in(account_ids.iter().map(|id| id.get())))
            .count(&self.db)
            .await?;
        Ok(count)
    }
}
