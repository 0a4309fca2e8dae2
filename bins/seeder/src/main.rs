//! Seeds a demo owner's chart of accounts and categories.
//!
//! Usage: seeder --owner 1
//!
//! Accounts and categories are seeded independently; each is skipped when
//! the owner already has some.

use anyhow::Context;
use clap::Parser;
use ledgerline_core::ledger::{AccountType, CategoryKind};
use ledgerline_db::repositories::{
    AccountRepository, CategoryRepository, CreateAccountInput, CreateCategoryInput,
};
use ledgerline_shared::AppConfig;
use ledgerline_shared::types::{AccountId, OwnerId};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seeder", about = "Seed a demo chart of accounts", long_about = None)]
struct Cli {
    /// Owner to seed.
    #[arg(short, long, env = "LEDGERLINE_SEED_OWNER", default_value_t = 1)]
    owner: i64,
}

/// (name, code, type) for each top-level demo account.
const ACCOUNTS: &[(&str, &str, AccountType)] = &[
    ("Cash", "1000", AccountType::Asset),
    ("Savings Bank", "1010", AccountType::Asset),
    ("Mutual Funds", "1200", AccountType::Asset),
    ("Credit Card", "2000", AccountType::Liability),
    ("Home Loan", "2100", AccountType::Liability),
    ("Opening Balance Equity", "3000", AccountType::Equity),
    ("Salary", "4000", AccountType::Income),
    ("Dividends", "4100", AccountType::Income),
    ("Groceries", "5000", AccountType::Expense),
    ("Rent", "5100", AccountType::Expense),
    ("Loan Interest", "5200", AccountType::Expense),
    ("GST Paid", "5300", AccountType::Expense),
    ("Bank Fees", "5400", AccountType::Expense),
];

const CATEGORIES: &[(&str, CategoryKind)] = &[
    ("Salary", CategoryKind::Income),
    ("Food", CategoryKind::Expense),
    ("Housing", CategoryKind::Expense),
    ("Transfers", CategoryKind::Transfer),
    ("Investments", CategoryKind::Investment),
    ("Loan Charges", CategoryKind::Loan),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledgerline=info,seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let owner = OwnerId::new(cli.owner).context("owner must be a positive integer")?;
    let config = AppConfig::load().context("loading configuration")?;

    let db = ledgerline_db::connect(&config.database)
        .await
        .context("connecting to database")?;
    let accounts = AccountRepository::new(db.clone())
        .with_default_currency(config.ledger.default_currency.clone());
    let categories = CategoryRepository::new(db);

    if accounts.list_accounts(owner).await?.is_empty() {
        seed_accounts(&accounts, owner).await?;
    } else {
        info!(owner_id = %owner, "Owner already has accounts, skipping");
    }

    if categories.list_categories(owner).await?.is_empty() {
        seed_categories(&categories, owner).await?;
    } else {
        info!(owner_id = %owner, "Owner already has categories, skipping");
    }

    info!(owner_id = %owner, "Seeding complete");
    Ok(())
}

async fn seed_accounts(accounts: &AccountRepository, owner: OwnerId) -> anyhow::Result<()> {
    let mut savings = None;
    for (name, code, account_type) in ACCOUNTS {
        let account = accounts
            .create_account(CreateAccountInput {
                code: Some((*code).to_string()),
                ..CreateAccountInput::new(owner, *name, *account_type)
            })
            .await
            .with_context(|| format!("creating account {name}"))?;
        if *code == "1010" {
            savings = Some(AccountId::from_db(account.id));
        }
        info!(account_id = account.id, name, "Created account");
    }

    // Sub-account under the savings bank, to show the tree.
    if let Some(parent) = savings {
        let account = accounts
            .create_account(CreateAccountInput {
                code: Some("1011".to_string()),
                parent_account_id: Some(parent),
                metadata: Some(serde_json::json!({ "purpose": "emergency fund" })),
                ..CreateAccountInput::new(owner, "Emergency Fund", AccountType::Asset)
            })
            .await
            .context("creating sub-account")?;
        info!(account_id = account.id, "Created sub-account");
    }
    Ok(())
}

async fn seed_categories(categories: &CategoryRepository, owner: OwnerId) -> anyhow::Result<()> {
    for (name, kind) in CATEGORIES {
        let category = categories
            .create_category(CreateCategoryInput {
                owner_id: owner,
                kind: *kind,
                name: (*name).to_string(),
                parent_category_id: None,
            })
            .await
            .with_context(|| format!("creating category {name}"))?;
        info!(category_id = category.id, name, "Created category");
    }
    Ok(())
}
