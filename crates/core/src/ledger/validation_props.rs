//! Property-based tests for balance validation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use ledgerline_shared::types::{AccountId, Amount};

use super::error::PostingError;
use super::types::{CandidateEntry, Side};
use super::validation::assert_balanced;

/// Amounts from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Debit), Just(Side::Credit)]
}

fn make_entry(side: Side, amount: Decimal) -> CandidateEntry {
    CandidateEntry::new(
        AccountId::from_db(1),
        side,
        Amount::from_decimal(amount).unwrap(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Mirroring every entry on the opposite side always balances.
    #[test]
    fn prop_mirrored_entries_balance(
        legs in proptest::collection::vec((side_strategy(), positive_amount()), 1..10),
    ) {
        let mut entries = Vec::with_capacity(legs.len() * 2);
        for (side, amount) in &legs {
            let opposite = match side {
                Side::Debit => Side::Credit,
                Side::Credit => Side::Debit,
            };
            entries.push(make_entry(*side, *amount));
            entries.push(make_entry(opposite, *amount));
        }

        let totals = assert_balanced(&entries).unwrap();
        prop_assert_eq!(totals.difference(), Decimal::ZERO);
    }

    /// Adding a lone entry to a balanced set is always reported, with the
    /// totals that were actually computed.
    #[test]
    fn prop_extra_entry_unbalances(
        amount in positive_amount(),
        extra in positive_amount(),
        extra_side in side_strategy(),
    ) {
        let entries = vec![
            make_entry(Side::Debit, amount),
            make_entry(Side::Credit, amount),
            make_entry(extra_side, extra),
        ];

        let (expected_debit, expected_credit) = match extra_side {
            Side::Debit => (amount + extra, amount),
            Side::Credit => (amount, amount + extra),
        };
        let result = assert_balanced(&entries);
        prop_assert!(
            matches!(
                result,
                Err(PostingError::Unbalanced { debit, credit })
                    if debit == expected_debit && credit == expected_credit
            ),
            "unexpected result {:?}",
            result
        );
    }
}
