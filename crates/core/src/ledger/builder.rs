//! Entry builder: turns a typed intent into candidate journal entries.
//!
//! Builders are pure. They normalize every field they read but do not check
//! the balancing invariant; that is [`super::validation::assert_balanced`]'s
//! job and it runs after every builder, whatever the type.

use ledgerline_shared::types::Amount;
use rust_decimal::Decimal;
use serde_json::Value;

use super::error::PostingError;
use super::payload::{Payload, value_decimal};
use super::types::{CandidateEntry, CategoryLegs, EntryShape, Side, TransactionType, TwoLeg};

/// One decomposed leg of an EMI payment.
struct EmiComponent {
    amount_field: &'static str,
    account_field: &'static str,
    category_field: Option<&'static str>,
    note: &'static str,
}

static EMI_COMPONENTS: [EmiComponent; 4] = [
    EmiComponent {
        amount_field: "principal_amount",
        account_field: "principal_liability_account_id",
        category_field: None,
        note: "Principal component",
    },
    EmiComponent {
        amount_field: "interest_amount",
        account_field: "interest_expense_account_id",
        category_field: Some("interest_category_id"),
        note: "Interest component",
    },
    EmiComponent {
        amount_field: "gst_amount",
        account_field: "gst_expense_account_id",
        category_field: Some("gst_category_id"),
        note: "GST component",
    },
    EmiComponent {
        amount_field: "fees_amount",
        account_field: "fees_expense_account_id",
        category_field: Some("fees_category_id"),
        note: "Fees component",
    },
];

/// Builds the candidate entries for `txn_type` from `payload`.
///
/// # Errors
///
/// Returns `MissingOrInvalidField`, `InvalidAmount`, `InvalidSide` or
/// `ComponentSplitMismatch` when the payload cannot produce entries.
pub fn build_entries(
    txn_type: TransactionType,
    payload: &Payload<'_>,
) -> Result<Vec<CandidateEntry>, PostingError> {
    match txn_type.shape() {
        EntryShape::TwoLeg(legs) => two_leg_entries(legs, payload),
        EntryShape::EmiSplit => emi_entries(payload),
        EntryShape::Manual => manual_entries(payload),
    }
}

fn two_leg_entries(
    legs: TwoLeg,
    payload: &Payload<'_>,
) -> Result<Vec<CandidateEntry>, PostingError> {
    let amount = payload.require_amount("amount")?;
    let debit_account = payload.account_id(legs.debit_account)?;
    let credit_account = payload.account_id(legs.credit_account)?;

    let category = payload.category_id("category_id");
    let (debit_category, credit_category) = match legs.category {
        CategoryLegs::None => (None, None),
        CategoryLegs::Both => (category, category),
        CategoryLegs::CreditOnly => (None, category),
    };

    Ok(vec![
        CandidateEntry::new(debit_account, Side::Debit, amount).with_category(debit_category),
        CandidateEntry::new(credit_account, Side::Credit, amount).with_category(credit_category),
    ])
}

fn emi_entries(payload: &Payload<'_>) -> Result<Vec<CandidateEntry>, PostingError> {
    let mut components = Vec::with_capacity(EMI_COMPONENTS.len());
    for component in &EMI_COMPONENTS {
        components.push((component, payload.component_amount(component.amount_field)?));
    }
    let total = payload.require_amount("total_amount")?;

    let split = components
        .iter()
        .filter_map(|(_, amount)| amount.map(Amount::value))
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .ok_or_else(|| PostingError::field("total_amount", "the sum of the EMI components"))?;
    if split != total.value() {
        return Err(PostingError::ComponentSplitMismatch {
            components: split,
            total: total.value(),
        });
    }

    let mut entries = Vec::with_capacity(EMI_COMPONENTS.len() + 1);
    for (component, amount) in components {
        let Some(amount) = amount else {
            continue;
        };
        let account = payload.account_id(component.account_field)?;
        let category = component
            .category_field
            .and_then(|field| payload.category_id(field));
        entries.push(
            CandidateEntry::new(account, Side::Debit, amount)
                .with_category(category)
                .with_note(component.note),
        );
    }

    let payment_account = payload.account_id("payment_account_id")?;
    entries.push(CandidateEntry::new(payment_account, Side::Credit, total).with_note("EMI paid"));

    Ok(entries)
}

fn manual_entries(payload: &Payload<'_>) -> Result<Vec<CandidateEntry>, PostingError> {
    payload
        .entry_rows("entries")?
        .iter()
        .enumerate()
        .map(|(index, row)| manual_entry(index, row))
        .collect()
}

fn manual_entry(index: usize, row: &Value) -> Result<CandidateEntry, PostingError> {
    let Value::Object(fields) = row else {
        return Err(PostingError::field(format!("entries[{index}]"), "an object"));
    };
    let row = Payload::new(fields);

    let account_id = row.account_id("account_id").map_err(|_| {
        PostingError::field(
            format!("entries[{index}].account_id"),
            "a positive integer account id",
        )
    })?;

    let raw_side = row.text("side").unwrap_or_default();
    let side = Side::parse(&raw_side).ok_or(PostingError::InvalidSide(raw_side))?;

    let amount = row
        .get("amount")
        .and_then(value_decimal)
        .and_then(Amount::from_decimal)
        .ok_or_else(|| PostingError::InvalidAmount {
            field: format!("entries[{index}].amount"),
        })?;

    let mut entry =
        CandidateEntry::new(account_id, side, amount).with_category(row.category_id("category_id"));
    if let Some(note) = row.text("note").filter(|n| !n.trim().is_empty()) {
        entry = entry.with_note(note);
    }
    Ok(entry)
}
