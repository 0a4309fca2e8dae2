//! Property-based tests for the entry builders.
//!
//! Every built journal balances, whatever the type and amounts.

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Map, Value, json};

use super::builder::build_entries;
use super::error::PostingError;
use super::payload::Payload;
use super::types::{EntryShape, Side, TransactionType};
use super::validation::{EntryTotals, assert_balanced};

/// Amounts from 0.01 to 1,000,000.00.
fn cents() -> impl Strategy<Value = i64> {
    1i64..100_000_000i64
}

/// A component may be zero, in which case it produces no entry.
fn component_cents() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0i64), 1i64..10_000_000i64]
}

fn two_leg_type() -> impl Strategy<Value = TransactionType> {
    proptest::sample::select(
        TransactionType::ALL
            .into_iter()
            .filter(|t| matches!(t.shape(), EntryShape::TwoLeg(_)))
            .collect::<Vec<_>>(),
    )
}

fn emi_type() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::LoanEmiPayment),
        Just(TransactionType::CardEmiPayment)
    ]
}

fn money(cents: i64) -> String {
    Decimal::new(cents, 2).to_string()
}

fn emi_payload(components: [i64; 4], total: i64) -> Map<String, Value> {
    let mut map = Map::new();
    let fields = [
        ("principal_amount", "principal_liability_account_id"),
        ("interest_amount", "interest_expense_account_id"),
        ("gst_amount", "gst_expense_account_id"),
        ("fees_amount", "fees_expense_account_id"),
    ];
    for (index, ((amount_field, account_field), value)) in
        fields.into_iter().zip(components).enumerate()
    {
        map.insert(amount_field.to_string(), json!(money(value)));
        map.insert(account_field.to_string(), json!(index + 10));
    }
    map.insert("total_amount".to_string(), json!(money(total)));
    map.insert("payment_account_id".to_string(), json!(1));
    map
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Two-leg types always produce one debit and one credit of equal amount.
    #[test]
    fn prop_two_leg_balances(txn_type in two_leg_type(), amount in cents()) {
        let EntryShape::TwoLeg(legs) = txn_type.shape() else {
            unreachable!("strategy only yields two-leg types");
        };
        let mut map = Map::new();
        map.insert("amount".to_string(), json!(money(amount)));
        map.insert(legs.debit_account.to_string(), json!(1));
        map.insert(legs.credit_account.to_string(), json!(2));

        let entries = build_entries(txn_type, &Payload::new(&map)).unwrap();
        prop_assert_eq!(entries.len(), 2);
        prop_assert_eq!(entries[0].side, Side::Debit);
        prop_assert_eq!(entries[1].side, Side::Credit);

        let totals = assert_balanced(&entries).unwrap();
        prop_assert_eq!(totals.debit, Decimal::new(amount, 2));
    }

    /// An EMI whose components sum to the total balances, with one debit
    /// per non-zero component plus the payment credit.
    #[test]
    fn prop_emi_split_balances(
        txn_type in emi_type(),
        components in proptest::array::uniform4(component_cents()),
    ) {
        let total: i64 = components.iter().sum();
        prop_assume!(total > 0);

        let map = emi_payload(components, total);
        let entries = build_entries(txn_type, &Payload::new(&map)).unwrap();

        let non_zero = components.iter().filter(|c| **c > 0).count();
        prop_assert_eq!(entries.len(), non_zero + 1);
        prop_assert!(assert_balanced(&entries).is_ok());
    }

    /// Any drift between the components and the total is rejected up front.
    #[test]
    fn prop_emi_split_mismatch_rejected(
        components in proptest::array::uniform4(component_cents()),
        drift in prop_oneof![-500i64..0, 1i64..500],
    ) {
        let sum: i64 = components.iter().sum();
        let total = sum + drift;
        prop_assume!(total > 0);

        let map = emi_payload(components, total);
        let result = build_entries(TransactionType::LoanEmiPayment, &Payload::new(&map));
        prop_assert!(
            matches!(result, Err(PostingError::ComponentSplitMismatch { .. })),
            "expected split mismatch, got {:?}",
            result
        );
    }

    /// Adjustments pass through caller entries; balance depends only on them.
    #[test]
    fn prop_adjustment_totals_match_input(
        debits in proptest::collection::vec(cents(), 1..6),
        credits in proptest::collection::vec(cents(), 1..6),
    ) {
        let rows: Vec<Value> = debits
            .iter()
            .map(|c| json!({ "account_id": 1, "side": "DEBIT", "amount": money(*c) }))
            .chain(
                credits
                    .iter()
                    .map(|c| json!({ "account_id": 2, "side": "credit", "amount": money(*c) })),
            )
            .collect();
        let mut map = Map::new();
        map.insert("entries".to_string(), Value::Array(rows));

        let entries = build_entries(TransactionType::Adjustment, &Payload::new(&map)).unwrap();
        prop_assert_eq!(entries.len(), debits.len() + credits.len());

        let totals = EntryTotals::from_entries(&entries).unwrap();
        prop_assert_eq!(totals.debit, Decimal::new(debits.iter().sum(), 2));
        prop_assert_eq!(totals.credit, Decimal::new(credits.iter().sum(), 2));
        prop_assert_eq!(
            assert_balanced(&entries).is_ok(),
            debits.iter().sum::<i64>() == credits.iter().sum::<i64>()
        );
    }
}
