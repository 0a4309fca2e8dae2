//! Posting service: payload in, persisted transaction id out.
//!
//! The pipeline is fixed: resolve the header, build entries for the
//! transaction type, check structure and balance, check account ownership,
//! then hand the result to the store in one atomic write. Any rejection
//! before the write leaves the store untouched.

use chrono::NaiveDate;
use chrono_tz::Tz;
use ledgerline_shared::config::LedgerConfig;
use ledgerline_shared::error::AppError;
use ledgerline_shared::types::{OwnerId, TransactionId};
use serde_json::{Map, Value};
use tracing::{Span, debug, error, info, instrument, warn};

use super::builder::build_entries;
use super::error::PostingError;
use super::ownership::assert_owned_and_active;
use super::payload::Payload;
use super::store::LedgerStore;
use super::types::{NewTransaction, TransactionType};
use super::validation::{assert_balanced, assert_well_formed};

/// Type used when a payload does not name one.
pub const DEFAULT_TXN_TYPE: TransactionType = TransactionType::Adjustment;

/// Converts a raw caller-supplied owner id.
///
/// # Errors
///
/// Returns `MissingOrInvalidField("owner_id")` for ids that are not positive.
pub fn owner_id_from_raw(raw: i64) -> Result<OwnerId, PostingError> {
    OwnerId::new(raw).ok_or_else(|| PostingError::field("owner_id", "a positive integer"))
}

/// Builds, validates and persists journal transactions.
#[derive(Debug, Clone)]
pub struct PostingService<S> {
    store: S,
    timezone: Tz,
}

impl<S: LedgerStore> PostingService<S> {
    /// Creates a service over `store`, using `timezone` for default dates.
    pub const fn new(store: S, timezone: Tz) -> Self {
        Self { store, timezone }
    }

    /// Creates a service using the ledger section of the app config.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the timezone is unknown.
    pub fn from_config(store: S, config: &LedgerConfig) -> Result<Self, AppError> {
        Ok(Self::new(store, config.tz()?))
    }

    /// Returns the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Runs every pure step of the pipeline and returns the transaction
    /// that would be written. Does not touch the store.
    ///
    /// # Errors
    ///
    /// Returns any rejection raised while resolving the header or building
    /// and checking the entries.
    pub fn prepare(
        &self,
        owner_id: OwnerId,
        payload: &Map<String, Value>,
    ) -> Result<NewTransaction, PostingError> {
        let payload = Payload::new(payload);

        // Only an absent tag gets the default; a present non-text tag is rejected.
        let txn_type = match payload.get("txn_type") {
            None => DEFAULT_TXN_TYPE,
            Some(value) => payload
                .text("txn_type")
                .ok_or_else(|| PostingError::UnsupportedTransactionType(value.to_string()))?
                .parse::<TransactionType>()?,
        };
        let txn_date = payload.date("txn_date")?.unwrap_or_else(|| self.today());
        let description = payload.text("description").unwrap_or_default();
        let external_ref = payload
            .text("external_ref")
            .filter(|r| !r.trim().is_empty());

        let entries = build_entries(txn_type, &payload)?;
        assert_well_formed(&entries)?;
        let totals = assert_balanced(&entries)?;
        debug!(
            entries = entries.len(),
            total = %totals.debit,
            "Built balanced entries"
        );

        Ok(NewTransaction {
            owner_id,
            txn_type,
            txn_date,
            description,
            external_ref,
            entries,
        })
    }

    /// Creates a balanced transaction from `payload` and returns its id.
    ///
    /// Not idempotent: the same payload posted twice creates two
    /// transactions.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the payload is invalid, unbalanced, or
    /// references accounts the owner cannot post to, and `Storage` if the
    /// write fails. Nothing is persisted in any error case.
    #[instrument(
        skip(self, payload),
        fields(owner_id = %owner_id, txn_type = tracing::field::Empty)
    )]
    pub async fn create_transaction(
        &self,
        owner_id: OwnerId,
        payload: &Map<String, Value>,
    ) -> Result<TransactionId, PostingError> {
        let result = self.post(owner_id, payload).await;

        match &result {
            Err(PostingError::Storage(source)) => {
                error!(error = %source, "Failed to persist transaction");
            }
            Err(e) => warn!(code = e.error_code(), error = %e, "Transaction rejected"),
            Ok(_) => {}
        }
        result
    }

    async fn post(
        &self,
        owner_id: OwnerId,
        payload: &Map<String, Value>,
    ) -> Result<TransactionId, PostingError> {
        let transaction = self.prepare(owner_id, payload)?;
        Span::current().record("txn_type", transaction.txn_type.as_str());

        assert_owned_and_active(&self.store, owner_id, &transaction.entries).await?;

        let id = self
            .store
            .persist(&transaction)
            .await
            .map_err(PostingError::Storage)?;

        info!(
            transaction_id = %id,
            entries = transaction.entries.len(),
            "Transaction posted"
        );
        Ok(id)
    }

    fn today(&self) -> NaiveDate {
        chrono::Utc::now().with_timezone(&self.timezone).date_naive()
    }
}
