//! Create `qa` table.
//!
//! `category_id`, `source_doc_id` and `create_user_id` are plain integers with
//! no foreign key constraints.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Qa::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Qa::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(text(Qa::Question))
                    .col(text(Qa::Answer))
                    .col(ColumnDef::new(Qa::CategoryId).big_integer().null())
                    .col(string_len(Qa::Source, 50).default("MANUAL"))
                    .col(ColumnDef::new(Qa::SourceDocId).big_integer().null())
                    .col(integer(Qa::ViewCount).default(0))
                    .col(integer(Qa::LikeCount).default(0))
                    .col(ColumnDef::new(Qa::CreateUserId).big_integer().null())
                    .col(
                        timestamp_with_time_zone(Qa::CreateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Qa::UpdateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Qa::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Qa {
    Table,
    Id,
    Question,
    Answer,
    CategoryId,
    Source,
    SourceDocId,
    ViewCount,
    LikeCount,
    CreateUserId,
    CreateTime,
    UpdateTime,
}
