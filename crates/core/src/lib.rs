//! Core business logic for Ledgerline.
//!
//! This crate contains the posting engine with ZERO web or database
//! dependencies. Storage is reached only through the
//! [`ledger::LedgerStore`] trait.
//!
//! # Modules
//!
//! - `ledger` - Double-entry posting: entry building, validation, orchestration

pub mod ledger;
