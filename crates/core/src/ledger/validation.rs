//! Invariant validation for candidate entries.

use ledgerline_shared::types::round_money;
use rust_decimal::Decimal;

use super::error::PostingError;
use super::types::{CandidateEntry, Side};

/// Debit and credit totals of a set of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryTotals {
    /// Sum of debit amounts, rounded to two decimals.
    pub debit: Decimal,
    /// Sum of credit amounts, rounded to two decimals.
    pub credit: Decimal,
}

impl EntryTotals {
    /// Sums both sides independently.
    ///
    /// # Errors
    ///
    /// Returns `MissingOrInvalidField("entries")` if a side total overflows.
    pub fn from_entries(entries: &[CandidateEntry]) -> Result<Self, PostingError> {
        let mut debit = Decimal::ZERO;
        let mut credit = Decimal::ZERO;

        for entry in entries {
            let total = match entry.side {
                Side::Debit => &mut debit,
                Side::Credit => &mut credit,
            };
            *total = total.checked_add(entry.amount.value()).ok_or_else(|| {
                PostingError::field("entries", "amounts with a representable total")
            })?;
        }

        Ok(Self {
            debit: round_money(debit),
            credit: round_money(credit),
        })
    }

    /// Returns true if debits equal credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.debit == self.credit
    }

    /// Returns debits minus credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Checks the structure of an entry list.
///
/// Sides, positive amounts and positive account ids are guaranteed by the
/// entry types themselves, so what is left is emptiness.
///
/// # Errors
///
/// Returns `MissingOrInvalidField("entries")` for an empty list.
pub fn assert_well_formed(entries: &[CandidateEntry]) -> Result<(), PostingError> {
    if entries.is_empty() {
        return Err(PostingError::field("entries", "at least one entry"));
    }
    Ok(())
}

/// Checks that debits equal credits at two-decimal precision.
///
/// # Errors
///
/// Returns `Unbalanced` with both totals when they differ. Never adjusts
/// the entries to force a balance. Returns `MissingOrInvalidField` if a
/// total cannot be represented.
pub fn assert_balanced(entries: &[CandidateEntry]) -> Result<EntryTotals, PostingError> {
    let totals = EntryTotals::from_entries(entries)?;
    if !totals.is_balanced() {
        return Err(PostingError::Unbalanced {
            debit: totals.debit,
            credit: totals.credit,
        });
    }
    Ok(totals)
}
