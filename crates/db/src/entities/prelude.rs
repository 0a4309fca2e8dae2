//! Entity re-exports.

pub use super::accounts::Entity as Accounts;
pub use super::categories::Entity as Categories;
pub use super::journal_entries::Entity as JournalEntries;
pub use super::transactions::Entity as Transactions;
