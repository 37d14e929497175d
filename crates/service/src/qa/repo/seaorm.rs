use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, TransactionTrait};

use crate::errors::ServiceError;
use crate::qa::repository::{QaFields, QaRepository};
use models::qa;

pub struct SeaOrmQaRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl QaRepository for SeaOrmQaRepository {
    async fn list_page(&self, page: u64, size: u64) -> Result<(Vec<qa::Model>, u64), ServiceError> {
        let paginator = qa::Entity::find()
            .order_by_asc(qa::Column::Id)
            .paginate(&self.db, size);
        let total = paginator.num_items().await?;
        let content = paginator.fetch_page(page).await?;
        Ok((content, total))
    }

    async fn view(&self, id: i64) -> Result<Option<qa::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        if !qa::increment_view(&txn, id).await? {
            txn.rollback().await?;
            return Ok(None);
        }
        let row = qa::Entity::find_by_id(id).one(&txn).await?;
        txn.commit().await?;
        Ok(row)
    }

    async fn create(&self, fields: QaFields, create_user_id: i64) -> Result<qa::Model, ServiceError> {
        let created = qa::create(&self.db, &fields.question, &fields.answer, fields.category_id, Some(create_user_id)).await?;
        Ok(created)
    }

    async fn update(&self, id: i64, fields: QaFields) -> Result<Option<qa::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let updated = qa::update_content(&txn, id, &fields.question, &fields.answer, fields.category_id).await?;
        txn.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = qa::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn like(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(qa::increment_like(&self.db, id).await?)
    }
}
