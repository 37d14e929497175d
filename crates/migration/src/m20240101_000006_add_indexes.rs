use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Qa: lookups by category
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_qa_category")
                    .table(Qa::Table)
                    .col(Qa::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Attachment: composite (related_type, related_id)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attachment_related")
                    .table(Attachment::Table)
                    .col(Attachment::RelatedType)
                    .col(Attachment::RelatedId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_attachment_related").table(Attachment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_qa_category").table(Qa::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Qa { Table, CategoryId }

#[derive(DeriveIden)]
enum Attachment { Table, RelatedType, RelatedId }
