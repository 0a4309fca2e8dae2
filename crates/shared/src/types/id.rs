//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing an `AccountId` where a
//! `CategoryId` is expected. All IDs are database-generated positive integers,
//! so they can be serialized but not deserialized:
//!
//! ```compile_fail
//! use ledgerline_shared::types::AccountId;
//!
//! let _: AccountId = serde_json::from_str("0").unwrap();
//! ```

use serde::Serialize;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an ID, returning `None` unless the value is positive.
            #[must_use]
            pub const fn new(value: i64) -> Option<Self> {
                if value > 0 { Some(Self(value)) } else { None }
            }

            /// Wraps a value already known to be a valid database identity.
            #[must_use]
            pub const fn from_db(value: i64) -> Self {
                Self(value)
            }

            /// Returns the inner integer.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

typed_id!(OwnerId, "Identifier of the end-user who owns ledger data.");
typed_id!(AccountId, "Unique identifier for a chart of accounts entry.");
typed_id!(CategoryId, "Unique identifier for a category.");
typed_id!(TransactionId, "Unique identifier for a transaction.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_positive() {
        assert_eq!(AccountId::new(7).map(AccountId::get), Some(7));
        assert!(AccountId::new(0).is_none());
        assert!(AccountId::new(-3).is_none());
    }

    #[test]
    fn test_display_and_into_i64() {
        let id = TransactionId::from_db(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i64::from(id), 42);
    }
}
