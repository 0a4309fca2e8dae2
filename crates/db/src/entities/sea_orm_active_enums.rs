//! `SeaORM` active enums stored as short strings.

use ledgerline_core::ledger::types as domain;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AccountType {
    #[sea_orm(string_value = "ASSET")]
    Asset,
    #[sea_orm(string_value = "LIABILITY")]
    Liability,
    #[sea_orm(string_value = "EQUITY")]
    Equity,
    #[sea_orm(string_value = "INCOME")]
    Income,
    #[sea_orm(string_value = "EXPENSE")]
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CategoryKind {
    #[sea_orm(string_value = "INCOME")]
    Income,
    #[sea_orm(string_value = "EXPENSE")]
    Expense,
    #[sea_orm(string_value = "TRANSFER")]
    Transfer,
    #[sea_orm(string_value = "INVESTMENT")]
    Investment,
    #[sea_orm(string_value = "LOAN")]
    Loan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum EntrySide {
    #[sea_orm(string_value = "DEBIT")]
    Debit,
    #[sea_orm(string_value = "CREDIT")]
    Credit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum TransactionStatus {
    #[sea_orm(string_value = "POSTED")]
    Posted,
    #[sea_orm(string_value = "VOID")]
    Void,
}

impl From<domain::AccountType> for AccountType {
    fn from(value: domain::AccountType) -> Self {
        match value {
            domain::AccountType::Asset => Self::Asset,
            domain::AccountType::Liability => Self::Liability,
            domain::AccountType::Equity => Self::Equity,
            domain::AccountType::Income => Self::Income,
            domain::AccountType::Expense => Self::Expense,
        }
    }
}

impl From<domain::CategoryKind> for CategoryKind {
    fn from(value: domain::CategoryKind) -> Self {
        match value {
            domain::CategoryKind::Income => Self::Income,
            domain::CategoryKind::Expense => Self::Expense,
            domain::CategoryKind::Transfer => Self::Transfer,
            domain::CategoryKind::Investment => Self::Investment,
            domain::CategoryKind::Loan => Self::Loan,
        }
    }
}

impl From<domain::Side> for EntrySide {
    fn from(value: domain::Side) -> Self {
        match value {
            domain::Side::Debit => Self::Debit,
            domain::Side::Credit => Self::Credit,
        }
    }
}

impl From<EntrySide> for domain::Side {
    fn from(value: EntrySide) -> Self {
        match value {
            EntrySide::Debit => Self::Debit,
            EntrySide::Credit => Self::Credit,
        }
    }
}

impl From<domain::TransactionStatus> for TransactionStatus {
    fn from(value: domain::TransactionStatus) -> Self {
        match value {
            domain::TransactionStatus::Posted => Self::Posted,
            domain::TransactionStatus::Void => Self::Void,
        }
    }
}
