//! Posts a JSON payload as a balanced journal transaction.
//!
//! Usage: poster --owner 1 payload.json
//!
//! Prints the new transaction id and its entries. Exits non-zero with the
//! error code and suggested status when the payload is rejected or the write
//! fails; the cause is reported as an `AppError`.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use ledgerline_core::ledger::{PostingService, Side, owner_id_from_raw};
use ledgerline_db::SeaOrmLedgerStore;
use ledgerline_shared::{AppConfig, AppError};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "poster", about = "Post a journal transaction", long_about = None)]
struct Cli {
    /// Owner posting the transaction.
    #[arg(short, long, env = "LEDGERLINE_OWNER")]
    owner: i64,
    /// JSON file holding the payload object.
    #[arg(value_name = "FILE")]
    payload: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledgerline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let owner = owner_id_from_raw(cli.owner)?;

    let raw = std::fs::read_to_string(&cli.payload)
        .with_context(|| format!("reading {}", cli.payload.display()))?;
    let Value::Object(payload) = serde_json::from_str::<Value>(&raw).context("parsing payload")?
    else {
        bail!("payload must be a JSON object");
    };

    let config = AppConfig::load().context("loading configuration")?;
    let db = ledgerline_db::connect(&config.database)
        .await
        .context("connecting to database")?;
    info!("Connected to database");

    let service = PostingService::from_config(SeaOrmLedgerStore::new(db), &config.ledger)?;

    let id = match service.create_transaction(owner, &payload).await {
        Ok(id) => id,
        Err(err) => {
            let context = format!(
                "posting failed [{} {}]",
                err.error_code(),
                err.http_status_code()
            );
            return Err(anyhow::Error::new(AppError::from(err)).context(context));
        }
    };

    let stored = service
        .store()
        .transactions()
        .get_transaction(owner, id)
        .await?;

    println!(
        "transaction {id} ({} on {})",
        stored.transaction.txn_type, stored.transaction.txn_date
    );
    for entry in &stored.entries {
        println!(
            "  {:<6} account {:>6}  {:>14.2}{}{}",
            Side::from(entry.side).as_str(),
            entry.account_id,
            entry.amount,
            entry
                .category_id
                .map(|c| format!("  category {c}"))
                .unwrap_or_default(),
            entry
                .note
                .as_deref()
                .map(|n| format!("  ({n})"))
                .unwrap_or_default(),
        );
    }
    Ok(())
}
