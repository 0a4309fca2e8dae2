//! Initial database migration.
//!
//! Creates the chart of accounts, categories, transaction headers and
//! journal entries.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // PART 1: CHART OF ACCOUNTS
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Accounts::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Accounts::Code).string_len(50))
                    .col(ColumnDef::new(Accounts::AccountType).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Accounts::Currency)
                            .string_len(3)
                            .not_null()
                            .default("INR"),
                    )
                    .col(ColumnDef::new(Accounts::ParentAccountId).big_integer())
                    .col(
                        ColumnDef::new(Accounts::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Accounts::Metadata).json())
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accounts_parent")
                            .from(Accounts::Table, Accounts::ParentAccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_accounts_owner_active")
                    .table(Accounts::Table)
                    .col(Accounts::OwnerId)
                    .col(Accounts::IsActive)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 2: CATEGORIES
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Categories::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(Categories::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Categories::ParentCategoryId).big_integer())
                    .col(
                        ColumnDef::new(Categories::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_categories_parent")
                            .from(Categories::Table, Categories::ParentCategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 3: TRANSACTIONS & JOURNAL
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Transactions::TxnType).string_len(32).not_null())
                    .col(ColumnDef::new(Transactions::TxnDate).date().not_null())
                    .col(
                        ColumnDef::new(Transactions::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Transactions::ExternalRef).string_len(100))
                    .col(
                        ColumnDef::new(Transactions::Status)
                            .string_len(8)
                            .not_null()
                            .default("POSTED"),
                    )
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JournalEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JournalEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(JournalEntries::TransactionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JournalEntries::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(JournalEntries::AccountId).big_integer().not_null())
                    .col(ColumnDef::new(JournalEntries::CategoryId).big_integer())
                    .col(ColumnDef::new(JournalEntries::Side).string_len(8).not_null())
                    .col(
                        ColumnDef::new(JournalEntries::Amount)
                            .decimal_len(18, 2)
                            .not_null()
                            .check(Expr::col(JournalEntries::Amount).gt(0)),
                    )
                    .col(ColumnDef::new(JournalEntries::Note).string_len(255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_entries_transaction")
                            .from(JournalEntries::Table, JournalEntries::TransactionId)
                            .to(Transactions::Table, Transactions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_entries_account")
                            .from(JournalEntries::Table, JournalEntries::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_entries_category")
                            .from(JournalEntries::Table, JournalEntries::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_journal_entries_owner_transaction")
                    .table(JournalEntries::Table)
                    .col(JournalEntries::OwnerId)
                    .col(JournalEntries::TransactionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_journal_entries_account")
                    .table(JournalEntries::Table)
                    .col(JournalEntries::AccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JournalEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    OwnerId,
    Name,
    Code,
    AccountType,
    Currency,
    ParentAccountId,
    IsActive,
    Metadata,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    OwnerId,
    Kind,
    Name,
    ParentCategoryId,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    OwnerId,
    TxnType,
    TxnDate,
    Description,
    ExternalRef,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum JournalEntries {
    Table,
    Id,
    TransactionId,
    OwnerId,
    AccountId,
    CategoryId,
    Side,
    Amount,
    Note,
}
