//! Ledger domain types for transaction posting.
//!
//! This module defines the closed vocabularies of the ledger (sides,
//! transaction types, statuses, account and category classifications) and
//! the candidate entries produced by the entry builder.

use chrono::NaiveDate;
use ledgerline_shared::types::{AccountId, Amount, CategoryId, OwnerId};
use serde::{Deserialize, Serialize};

use super::error::PostingError;

/// Side of a journal entry.
///
/// In double-entry bookkeeping:
/// - Debits increase asset/expense accounts, decrease liability/equity/income accounts
/// - Credits decrease asset/expense accounts, increase liability/equity/income accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Debit entry.
    Debit,
    /// Credit entry.
    Credit,
}

impl Side {
    /// Parses a side case-insensitively, ignoring surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "DEBIT" => Some(Self::Debit),
            "CREDIT" => Some(Self::Credit),
            _ => None,
        }
    }

    /// Returns the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debit => "DEBIT",
            Self::Credit => "CREDIT",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction type tag.
///
/// Each tag maps to one entry shape; see [`TransactionType::shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money received into an asset account.
    Income,
    /// Spending paid from cash or a bank account.
    ExpenseCashOrBank,
    /// Movement between two of the owner's accounts.
    Transfer,
    /// Purchase charged to a credit card.
    CreditCardPurchase,
    /// Repayment of a credit card balance.
    CreditCardPayment,
    /// Loan principal credited to a bank account.
    LoanDisbursement,
    /// Loan instalment split into principal, interest, GST and fees.
    LoanEmiPayment,
    /// Card instalment split into principal, interest, GST and fees.
    CardEmiPayment,
    /// Purchase of an investment asset.
    InvestmentBuy,
    /// Dividend or interest from an investment.
    InvestmentIncome,
    /// Sale or redemption of an investment asset.
    InvestmentRedeem,
    /// Free-form journal with caller-supplied entries.
    Adjustment,
}

impl TransactionType {
    /// Every supported type, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Income,
        Self::ExpenseCashOrBank,
        Self::Transfer,
        Self::CreditCardPurchase,
        Self::CreditCardPayment,
        Self::LoanDisbursement,
        Self::LoanEmiPayment,
        Self::CardEmiPayment,
        Self::InvestmentBuy,
        Self::InvestmentIncome,
        Self::InvestmentRedeem,
        Self::Adjustment,
    ];

    /// Returns the stored tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::ExpenseCashOrBank => "expense_cash_or_bank",
            Self::Transfer => "transfer",
            Self::CreditCardPurchase => "credit_card_purchase",
            Self::CreditCardPayment => "credit_card_payment",
            Self::LoanDisbursement => "loan_disbursement",
            Self::LoanEmiPayment => "loan_emi_payment",
            Self::CardEmiPayment => "card_emi_payment",
            Self::InvestmentBuy => "investment_buy",
            Self::InvestmentIncome => "investment_income",
            Self::InvestmentRedeem => "investment_redeem",
            Self::Adjustment => "adjustment",
        }
    }

    /// Returns how entries for this type are built.
    #[must_use]
    pub const fn shape(self) -> EntryShape {
        match self {
            Self::Income => EntryShape::TwoLeg(TwoLeg {
                debit_account: "to_account_id",
                credit_account: "income_account_id",
                category: CategoryLegs::Both,
            }),
            Self::ExpenseCashOrBank => EntryShape::TwoLeg(TwoLeg {
                debit_account: "expense_account_id",
                credit_account: "from_account_id",
                category: CategoryLegs::Both,
            }),
            Self::Transfer => EntryShape::TwoLeg(TwoLeg {
                debit_account: "to_account_id",
                credit_account: "from_account_id",
                category: CategoryLegs::None,
            }),
            Self::CreditCardPurchase => EntryShape::TwoLeg(TwoLeg {
                debit_account: "expense_or_asset_account_id",
                credit_account: "card_principal_account_id",
                category: CategoryLegs::Both,
            }),
            Self::CreditCardPayment => EntryShape::TwoLeg(TwoLeg {
                debit_account: "card_principal_account_id",
                credit_account: "bank_account_id",
                category: CategoryLegs::None,
            }),
            Self::LoanDisbursement => EntryShape::TwoLeg(TwoLeg {
                debit_account: "bank_account_id",
                credit_account: "loan_principal_account_id",
                category: CategoryLegs::None,
            }),
            Self::LoanEmiPayment | Self::CardEmiPayment => EntryShape::EmiSplit,
            Self::InvestmentBuy => EntryShape::TwoLeg(TwoLeg {
                debit_account: "investment_asset_account_id",
                credit_account: "bank_account_id",
                category: CategoryLegs::None,
            }),
            Self::InvestmentIncome => EntryShape::TwoLeg(TwoLeg {
                debit_account: "bank_account_id",
                credit_account: "investment_income_account_id",
                category: CategoryLegs::CreditOnly,
            }),
            Self::InvestmentRedeem => EntryShape::TwoLeg(TwoLeg {
                debit_account: "bank_account_id",
                credit_account: "investment_asset_account_id",
                category: CategoryLegs::None,
            }),
            Self::Adjustment => EntryShape::Manual,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = PostingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PostingError::UnsupportedTransactionType(s.to_string()))
    }
}

/// How a transaction type turns its payload into entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    /// One debit leg and one credit leg of the same `amount`.
    TwoLeg(TwoLeg),
    /// Up to four debit components closed by one credit of `total_amount`.
    EmiSplit,
    /// Caller-supplied `entries` array.
    Manual,
}

/// Payload keys for a two-leg transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoLeg {
    /// Key holding the debited account id.
    pub debit_account: &'static str,
    /// Key holding the credited account id.
    pub credit_account: &'static str,
    /// Which legs receive the payload's `category_id`.
    pub category: CategoryLegs,
}

/// Which legs of a two-leg transaction are tagged with `category_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryLegs {
    /// Neither leg.
    None,
    /// Both legs.
    Both,
    /// Only the credit leg.
    CreditOnly,
}

/// Transaction lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// Posted to the ledger. Every transaction is created in this state.
    Posted,
    /// Voided. Reserved; nothing in the posting engine produces it.
    Void,
}

impl TransactionStatus {
    /// Returns the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Posted => "POSTED",
            Self::Void => "VOID",
        }
    }
}

/// Account classification in the chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Things owned: cash, bank, investments.
    Asset,
    /// Things owed: loans, card balances.
    Liability,
    /// Owner's residual interest.
    Equity,
    /// Earnings.
    Income,
    /// Spending.
    Expense,
}

impl AccountType {
    /// Returns the side on which this account type's balance is positive.
    #[must_use]
    pub const fn normal_side(self) -> Side {
        match self {
            Self::Asset | Self::Expense => Side::Debit,
            Self::Liability | Self::Equity | Self::Income => Side::Credit,
        }
    }
}

/// Category kind. Categories tag entries and never affect balancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryKind {
    /// Income category.
    Income,
    /// Expense category.
    Expense,
    /// Transfer category.
    Transfer,
    /// Investment category.
    Investment,
    /// Loan category.
    Loan,
}

/// A journal entry that has been built and normalized but not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    /// The account posted to.
    pub account_id: AccountId,
    /// Debit or credit.
    pub side: Side,
    /// Positive two-decimal amount.
    pub amount: Amount,
    /// Optional tagging category.
    pub category_id: Option<CategoryId>,
    /// Optional line note.
    pub note: Option<String>,
}

impl CandidateEntry {
    /// Creates an untagged entry without a note.
    #[must_use]
    pub const fn new(account_id: AccountId, side: Side, amount: Amount) -> Self {
        Self {
            account_id,
            side,
            amount,
            category_id: None,
            note: None,
        }
    }

    /// Sets the tagging category.
    #[must_use]
    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Sets the line note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A validated transaction ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Owner of the transaction and of every entry.
    pub owner_id: OwnerId,
    /// Type tag.
    pub txn_type: TransactionType,
    /// Transaction date.
    pub txn_date: NaiveDate,
    /// Free-text description (may be empty).
    pub description: String,
    /// Optional caller reference.
    pub external_ref: Option<String>,
    /// Balanced entries, in build order.
    pub entries: Vec<CandidateEntry>,
}
