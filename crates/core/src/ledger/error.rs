//! Posting error types.
//!
//! Every failure of `create_transaction` is one of these kinds. None of them
//! are retried by the engine; all of them abort before anything is written.

use ledgerline_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use super::store::StoreError;

/// Errors that can occur while posting a transaction.
#[derive(Debug, Error)]
pub enum PostingError {
    // ========== Payload Errors ==========
    /// The `txn_type` tag is not one of the supported transaction types.
    #[error("Unsupported txn_type: {0}")]
    UnsupportedTransactionType(String),

    /// A required payload field is absent or malformed.
    #[error("{field} must be {expected}")]
    MissingOrInvalidField {
        /// Payload key, e.g. `amount` or `entries[1].account_id`.
        field: String,
        /// What the field should have contained.
        expected: &'static str,
    },

    /// An explicit entry amount is non-numeric, not positive, or too large
    /// to store.
    #[error("Entry amount must be > 0 and < 10^16 ({field})")]
    InvalidAmount {
        /// Payload key of the offending amount.
        field: String,
    },

    /// An explicit entry side is neither DEBIT nor CREDIT.
    #[error("Entry side must be DEBIT or CREDIT, got '{0}'")]
    InvalidSide(String),

    // ========== Invariant Errors ==========
    /// EMI components do not add up to the paid total.
    #[error(
        "EMI split mismatch: principal + interest + gst + fees ({components}) must equal total_amount ({total})"
    )]
    ComponentSplitMismatch {
        /// Sum of the principal, interest, gst and fees components.
        components: Decimal,
        /// The `total_amount` field.
        total: Decimal,
    },

    /// Journal is not balanced (debits != credits).
    #[error("Journal is not balanced. Debit: {debit}, Credit: {credit}")]
    Unbalanced {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// Some referenced account is missing, inactive, or owned by someone else.
    #[error("One or more accounts are invalid, inactive, or belong to another user")]
    InvalidAccountReference,

    // ========== Storage Errors ==========
    /// The storage backend failed. The source is the backend's own error.
    #[error("Storage error: {0}")]
    Storage(#[source] StoreError),
}

impl PostingError {
    pub(crate) fn field(field: impl Into<String>, expected: &'static str) -> Self {
        Self::MissingOrInvalidField {
            field: field.into(),
            expected,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedTransactionType(_) => "UNSUPPORTED_TRANSACTION_TYPE",
            Self::MissingOrInvalidField { .. } => "MISSING_OR_INVALID_FIELD",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::InvalidSide(_) => "INVALID_SIDE",
            Self::ComponentSplitMismatch { .. } => "COMPONENT_SPLIT_MISMATCH",
            Self::Unbalanced { .. } => "UNBALANCED",
            Self::InvalidAccountReference => "INVALID_ACCOUNT_REFERENCE",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Storage(_) => 500,
            _ => 422,
        }
    }

    /// Returns true if the failure came from the request rather than storage.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

impl From<PostingError> for AppError {
    fn from(err: PostingError) -> Self {
        match err {
            PostingError::UnsupportedTransactionType(_)
            | PostingError::MissingOrInvalidField { .. }
            | PostingError::InvalidAmount { .. }
            | PostingError::InvalidSide(_) => Self::Validation(err.to_string()),
            PostingError::ComponentSplitMismatch { .. }
            | PostingError::Unbalanced { .. }
            | PostingError::InvalidAccountReference => Self::BusinessRule(err.to_string()),
            PostingError::Storage(_) => Self::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PostingError::UnsupportedTransactionType("gift".into()).error_code(),
            "UNSUPPORTED_TRANSACTION_TYPE"
        );
        assert_eq!(
            PostingError::InvalidAccountReference.error_code(),
            "INVALID_ACCOUNT_REFERENCE"
        );
        assert_eq!(
            PostingError::Storage("boom".into()).error_code(),
            "STORAGE_ERROR"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(PostingError::InvalidSide("LEFT".into()).http_status_code(), 422);
        assert_eq!(PostingError::Storage("boom".into()).http_status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = PostingError::Unbalanced {
            debit: dec!(100.00),
            credit: dec!(50.00),
        };
        assert_eq!(
            err.to_string(),
            "Journal is not balanced. Debit: 100.00, Credit: 50.00"
        );

        let err = PostingError::field("amount", "a number > 0");
        assert_eq!(err.to_string(), "amount must be a number > 0");
    }

    #[test]
    fn test_account_reference_message_names_no_id() {
        let message = PostingError::InvalidAccountReference.to_string();
        assert!(!message.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_into_app_error() {
        let app: AppError = PostingError::InvalidAmount {
            field: "entries[0].amount".into(),
        }
        .into();
        assert_eq!(app.error_code(), "VALIDATION_ERROR");

        let app: AppError = PostingError::InvalidAccountReference.into();
        assert_eq!(app.error_code(), "BUSINESS_RULE_VIOLATION");

        let app: AppError = PostingError::Storage("disk full".into()).into();
        assert_eq!(app.error_code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_storage_source_is_preserved() {
        let err = PostingError::Storage(Box::new(std::io::Error::other("connection reset")));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }
}
