//! Create `document` table for uploaded source documents.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Document::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Document::Title, 200))
                    .col(string_len(Document::FilePath, 500))
                    .col(ColumnDef::new(Document::FileSize).big_integer().null())
                    .col(ColumnDef::new(Document::FileType).string_len(50).null())
                    .col(string_len(Document::Status, 20).default("UPLOADED"))
                    .col(ColumnDef::new(Document::ProcessResult).text().null())
                    .col(ColumnDef::new(Document::CreateUserId).big_integer().null())
                    .col(
                        timestamp_with_time_zone(Document::CreateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Document::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Document {
    Table,
    Id,
    Title,
    FilePath,
    FileSize,
    FileType,
    Status,
    ProcessResult,
    CreateUserId,
    CreateTime,
}
