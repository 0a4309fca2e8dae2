//! Double-entry posting engine.
//!
//! This module turns loosely-typed payloads into balanced journal entries:
//! - Domain types for sides, transaction types and entries
//! - Typed payload access with money rounding
//! - Entry builders, one per transaction shape
//! - Structural, balance and ownership validation
//! - The storage seam and the posting service

pub mod builder;
pub mod error;
pub mod ownership;
pub mod payload;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod builder_props;
#[cfg(test)]
mod memory;
#[cfg(test)]
mod validation_props;

pub use builder::build_entries;
pub use error::PostingError;
pub use ownership::{assert_owned_and_active, distinct_account_ids};
pub use payload::Payload;
pub use service::{DEFAULT_TXN_TYPE, PostingService, owner_id_from_raw};
pub use store::{LedgerStore, StoreError};
pub use types::{
    AccountType, CandidateEntry, CategoryKind, CategoryLegs, EntryShape, NewTransaction, Side,
    TransactionStatus, TransactionType, TwoLeg,
};
pub use validation::{EntryTotals, assert_balanced, assert_well_formed};
