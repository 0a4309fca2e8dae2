//! Money amounts with two-decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts wrap `rust_decimal::Decimal` and are rounded once, on entry,
//! so that every later comparison works on already-rounded values.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Number of fractional digits kept for every ledger amount.
pub const MONEY_SCALE: u32 = 2;

/// Exclusive upper bound of an [`Amount`].
///
/// Journal amounts are stored as `NUMERIC(18, 2)`, which holds at most 16
/// integer digits.
// 10^16 built from its 96-bit parts, since `Decimal::new` is not `const`.
pub const AMOUNT_LIMIT: Decimal = Decimal::from_parts(1_874_919_424, 2_328_306, 0, false, 0);

/// Rounds a value to [`MONEY_SCALE`] digits, midpoint away from zero.
///
/// `250.005` becomes `250.01` and `-0.005` becomes `-0.01`.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// A strictly positive amount with exactly two decimal places.
///
/// The only way to build one is [`Amount::from_decimal`], which rounds first
/// and then checks the range, so an `Amount` can always be written to a
/// journal entry as-is. It serializes as a plain decimal and has no
/// `Deserialize` impl:
///
/// ```compile_fail
/// use ledgerline_shared::types::Amount;
///
/// let _: Amount = serde_json::from_str("-5").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Rounds `value` to two decimals and returns it if the result is > 0
    /// and below [`AMOUNT_LIMIT`].
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        let rounded = round_money(value);
        if rounded > Decimal::ZERO && rounded < AMOUNT_LIMIT {
            Some(Self(rounded))
        } else {
            None
        }
    }

    /// Returns the rounded decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(250.005), dec!(250.01))]
    #[case(dec!(250.004), dec!(250.00))]
    #[case(dec!(0.125), dec!(0.13))]
    #[case(dec!(-0.005), dec!(-0.01))]
    #[case(dec!(3295), dec!(3295))]
    fn test_round_money(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_money(input), expected);
    }

    #[test]
    fn test_amount_rounds_before_positivity_check() {
        assert_eq!(Amount::from_decimal(dec!(250.005)).unwrap().value(), dec!(250.01));
        assert!(Amount::from_decimal(dec!(0.004)).is_none());
        assert!(Amount::from_decimal(dec!(0.005)).is_some());
        assert!(Amount::from_decimal(Decimal::ZERO).is_none());
        assert!(Amount::from_decimal(dec!(-10)).is_none());
    }

    #[rstest]
    #[case(dec!(9999999999999999.99), true)]
    #[case(dec!(9999999999999999.994), true)]
    #[case(dec!(9999999999999999.995), false)]
    #[case(dec!(10000000000000000), false)]
    #[case(dec!(50000000000000000000000000000), false)]
    fn test_amount_fits_numeric_18_2(#[case] value: Decimal, #[case] accepted: bool) {
        assert_eq!(Amount::from_decimal(value).is_some(), accepted);
    }

    #[test]
    fn test_amount_display_has_two_decimals() {
        assert_eq!(Amount::from_decimal(dec!(100)).unwrap().to_string(), "100.00");
        assert_eq!(Amount::from_decimal(dec!(45.5)).unwrap().to_string(), "45.50");
    }
}
