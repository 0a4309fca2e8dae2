//! Category repository. Categories tag entries for reporting and are never
//! part of the balancing rules.

use ledgerline_core::ledger::CategoryKind;
use ledgerline_shared::types::{CategoryId, OwnerId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::error::RepositoryError;
use crate::entities::categories;

/// Input for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    /// Owner of the category.
    pub owner_id: OwnerId,
    /// Category kind.
    pub kind: CategoryKind,
    /// Display name.
    pub name: String,
    /// Parent category in the same owner's tree.
    pub parent_category_id: Option<CategoryId>,
}

/// Category repository.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new category.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent category does not exist or belongs to
    /// a different owner, or if the insert fails.
    pub async fn create_category(
        &self,
        input: CreateCategoryInput,
    ) -> Result<categories::Model, RepositoryError> {
        if let Some(parent_id) = input.parent_category_id {
            let parent = categories::Entity::find_by_id(parent_id.get())
                .one(&self.db)
                .await?
                .ok_or(RepositoryError::ParentNotFound {
                    entity: "category",
                    id: parent_id.get(),
                })?;
            if parent.owner_id != input.owner_id.get() {
                return Err(RepositoryError::ParentWrongOwner("category"));
            }
        }

        let category = categories::ActiveModel {
            owner_id: Set(input.owner_id.get()),
            kind: Set(input.kind.into()),
            name: Set(input.name),
            parent_category_id: Set(input.parent_category_id.map(CategoryId::get)),
            is_active: Set(true),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        Ok(category.insert(&self.db).await?)
    }

    /// Lists an owner's categories in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_categories(
        &self,
        owner_id: OwnerId,
    ) -> Result<Vec<categories::Model>, RepositoryError> {
        let categories = categories::Entity::find()
            .filter(categories::Column::OwnerId.eq(owner_id.get()))
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await?;
        Ok(categories)
    }
}
