//! Shared setup for database integration tests.

#![allow(dead_code)]

use ledgerline_core::ledger::{AccountType, CategoryKind, PostingService};
use ledgerline_db::entities::{journal_entries, transactions};
use ledgerline_db::migration::{Migrator, MigratorTrait};
use ledgerline_db::repositories::{
    AccountRepository, CategoryRepository, CreateAccountInput, CreateCategoryInput,
};
use ledgerline_db::{SeaOrmLedgerStore, connect};
use ledgerline_shared::config::{DatabaseConfig, LedgerConfig};
use ledgerline_shared::types::{AccountId, CategoryId, OwnerId};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{Map, Value};

/// Opens a fresh in-memory SQLite database with the schema applied.
///
/// The pool is pinned to one connection so every query sees the same
/// in-memory database.
pub async fn setup_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        connect_timeout_secs: 8,
        sqlx_logging: false,
    };
    let db = connect(&config).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub fn service(db: &DatabaseConnection) -> PostingService<SeaOrmLedgerStore> {
    PostingService::from_config(SeaOrmLedgerStore::new(db.clone()), &LedgerConfig::default())
        .expect("default ledger config is valid")
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("test payloads are objects"),
    }
}

/// A demo chart of accounts for one owner.
pub struct Chart {
    pub owner: OwnerId,
    pub bank: AccountId,
    pub salary: AccountId,
    pub groceries: AccountId,
    pub card: AccountId,
    pub loan: AccountId,
    pub interest: AccountId,
    pub gst: AccountId,
    pub fees: AccountId,
    pub food: CategoryId,
    pub loan_interest: CategoryId,
}

pub async fn create_account(
    db: &DatabaseConnection,
    owner: OwnerId,
    name: &str,
    account_type: AccountType,
) -> AccountId {
    let account = AccountRepository::new(db.clone())
        .create_account(CreateAccountInput::new(owner, name, account_type))
        .await
        .expect("create account");
    AccountId::from_db(account.id)
}

pub async fn create_category(
    db: &DatabaseConnection,
    owner: OwnerId,
    name: &str,
    kind: CategoryKind,
) -> CategoryId {
    let category = CategoryRepository::new(db.clone())
        .create_category(CreateCategoryInput {
            owner_id: owner,
            kind,
            name: name.to_string(),
            parent_category_id: None,
        })
        .await
        .expect("create category");
    CategoryId::from_db(category.id)
}

pub async fn setup_chart(db: &DatabaseConnection, owner: OwnerId) -> Chart {
    Chart {
        owner,
        bank: create_account(db, owner, "Savings Bank", AccountType::Asset).await,
        salary: create_account(db, owner, "Salary", AccountType::Income).await,
        groceries: create_account(db, owner, "Groceries", AccountType::Expense).await,
        card: create_account(db, owner, "Credit Card", AccountType::Liability).await,
        loan: create_account(db, owner, "Home Loan", AccountType::Liability).await,
        interest: create_account(db, owner, "Loan Interest", AccountType::Expense).await,
        gst: create_account(db, owner, "GST Paid", AccountType::Expense).await,
        fees: create_account(db, owner, "Bank Fees", AccountType::Expense).await,
        food: create_category(db, owner, "Food", CategoryKind::Expense).await,
        loan_interest: create_category(db, owner, "Interest", CategoryKind::Loan).await,
    }
}

pub async fn count_transactions(db: &DatabaseConnection) -> u64 {
    transactions::Entity::find()
        .count(db)
        .await
        .expect("count transactions")
}

pub async fn count_journal_entries(db: &DatabaseConnection) -> u64 {
    journal_entries::Entity::find()
        .count(db)
        .await
        .expect("count journal entries")
}
