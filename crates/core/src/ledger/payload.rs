//! Typed access to loosely-typed posting payloads.
//!
//! Payloads are JSON objects. Numbers may arrive as JSON numbers or as
//! numeric strings; every amount is rounded to two decimals as it is read.

use std::str::FromStr;

use chrono::NaiveDate;
use ledgerline_shared::types::{AccountId, Amount, CategoryId, round_money};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value};

use super::error::PostingError;

/// A borrowed view over a posting payload.
#[derive(Debug, Clone, Copy)]
pub struct Payload<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Payload<'a> {
    /// Wraps a JSON object.
    #[must_use]
    pub const fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Returns the raw value of `key`, treating JSON `null` as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// Returns `key` as text. Numbers are rendered, other values are absent.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_text)
    }

    /// Reads a required amount that must be > 0 after rounding and below
    /// [`AMOUNT_LIMIT`](ledgerline_shared::types::AMOUNT_LIMIT).
    pub fn require_amount(&self, key: &str) -> Result<Amount, PostingError> {
        self.get(key)
            .and_then(value_decimal)
            .and_then(Amount::from_decimal)
            .ok_or_else(|| PostingError::field(key, "a number > 0 and < 10^16"))
    }

    /// Reads an optional component amount. Absent means zero.
    ///
    /// The sign is checked on the raw value, so `-0.001` is rejected even
    /// though it rounds to zero. Returns `None` for zero after rounding.
    pub fn component_amount(&self, key: &str) -> Result<Option<Amount>, PostingError> {
        const EXPECTED: &str = "a number >= 0 and < 10^16";

        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let raw = value_decimal(value)
            .filter(|d| *d >= Decimal::ZERO)
            .ok_or_else(|| PostingError::field(key, EXPECTED))?;
        if round_money(raw).is_zero() {
            return Ok(None);
        }
        Amount::from_decimal(raw)
            .map(Some)
            .ok_or_else(|| PostingError::field(key, EXPECTED))
    }

    /// Reads a required account id.
    pub fn account_id(&self, key: &str) -> Result<AccountId, PostingError> {
        self.get(key)
            .and_then(value_id)
            .and_then(AccountId::new)
            .ok_or_else(|| PostingError::field(key, "a positive integer account id"))
    }

    /// Reads an optional category id. Anything that is not a positive
    /// integer is treated as absent.
    #[must_use]
    pub fn category_id(&self, key: &str) -> Option<CategoryId> {
        self.get(key).and_then(value_id).and_then(CategoryId::new)
    }

    /// Reads an optional ISO date (`YYYY-MM-DD`).
    pub fn date(&self, key: &str) -> Result<Option<NaiveDate>, PostingError> {
        match self.text(key) {
            None => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|_| PostingError::field(key, "an ISO date (YYYY-MM-DD)")),
        }
    }

    /// Reads the non-empty array of explicit entries for an adjustment.
    pub fn entry_rows(&self, key: &str) -> Result<&'a [Value], PostingError> {
        match self.get(key) {
            Some(Value::Array(rows)) if !rows.is_empty() => Ok(rows.as_slice()),
            _ => Err(PostingError::field(key, "a non-empty array of entries")),
        }
    }
}

/// Parses a JSON number or numeric string into a decimal.
///
/// Scientific notation is accepted; booleans, arrays and objects are not.
#[must_use]
pub fn value_decimal(value: &Value) -> Option<Decimal> {
    let raw = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .ok()
}

fn value_id(value: &Value) -> Option<i64> {
    if let Some(id) = value.as_i64() {
        return Some(id);
    }
    let decimal = value_decimal(value)?;
    if decimal.fract().is_zero() {
        decimal.to_i64()
    } else {
        None
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
