//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod account;
pub mod category;
pub mod error;
pub mod transaction;

pub use account::{AccountRepository, CreateAccountInput, DEFAULT_CURRENCY};
pub use category::{CategoryRepository, CreateCategoryInput};
pub use error::RepositoryError;
pub use transaction::{TransactionRepository, TransactionWithEntries};
