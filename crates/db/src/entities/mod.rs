//! `SeaORM` entity definitions.

pub mod prelude;

pub mod accounts;
pub mod categories;
pub mod journal_entries;
pub mod sea_orm_active_enums;
pub mod transactions;
