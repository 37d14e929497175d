//! Create `attachment` table.
//! Polymorphic: (`related_type`, `related_id`) points at any other row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attachment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attachment::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Attachment::FileName, 200))
                    .col(string_len(Attachment::FilePath, 500))
                    .col(ColumnDef::new(Attachment::FileSize).big_integer().null())
                    .col(ColumnDef::new(Attachment::FileType).string_len(50).null())
                    .col(ColumnDef::new(Attachment::RelatedId).big_integer().null())
                    .col(ColumnDef::new(Attachment::RelatedType).string_len(50).null())
                    .col(
                        timestamp_with_time_zone(Attachment::CreateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Attachment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Attachment {
    Table,
    Id,
    FileName,
    FilePath,
    FileSize,
    FileType,
    RelatedId,
    RelatedType,
    CreateTime,
}
