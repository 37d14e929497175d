use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};

use crate::category::repository::CategoryRepository;
use crate::errors::ServiceError;
use models::category;

pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn list(&self) -> Result<Vec<category::Model>, ServiceError> {
        let rows = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<category::Model>, ServiceError> {
        Ok(category::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create(&self, name: &str, description: Option<String>) -> Result<category::Model, ServiceError> {
        Ok(category::create(&self.db, name, description).await?)
    }

    async fn update(&self, id: i64, name: &str, description: Option<String>) -> Result<Option<category::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let updated = category::update(&txn, id, name, description).await?;
        txn.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = category::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
