//! Ownership validation: every account must exist, be active, and belong to
//! the owner posting the transaction.

use std::collections::BTreeSet;

use ledgerline_shared::types::{AccountId, OwnerId};

use super::error::PostingError;
use super::store::LedgerStore;
use super::types::CandidateEntry;

/// Returns the distinct account ids referenced by `entries`, sorted.
#[must_use]
pub fn distinct_account_ids(entries: &[CandidateEntry]) -> Vec<AccountId> {
    entries
        .iter()
        .map(|e| e.account_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Checks all referenced accounts with a single count query.
///
/// A count mismatch covers missing, inactive and foreign accounts alike;
/// the error does not say which id failed.
///
/// # Errors
///
/// Returns `InvalidAccountReference` on mismatch or `Storage` if the lookup
/// fails.
pub async fn assert_owned_and_active<S>(
    store: &S,
    owner_id: OwnerId,
    entries: &[CandidateEntry],
) -> Result<(), PostingError>
where
    S: LedgerStore + ?Sized,
{
    let account_ids = distinct_account_ids(entries);
    let matching = store
        .count_owned_active_accounts(owner_id, &account_ids)
        .await
        .map_err(PostingError::Storage)?;

    if matching != account_ids.len() as u64 {
        return Err(PostingError::InvalidAccountReference);
    }
    Ok(())
}
