use async_trait::async_trait;
use models::category;

use crate::errors::ServiceError;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories in ascending id order.
    async fn list(&self) -> Result<Vec<category::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<category::Model>, ServiceError>;
    async fn create(&self, name: &str, description: Option<String>) -> Result<category::Model, ServiceError>;
    /// `None` when the id does not exist.
    async fn update(&self, id: i64, name: &str, description: Option<String>) -> Result<Option<category::Model>, ServiceError>;
    /// True when a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// In-memory repository for tests
pub mod memory {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Table {
        next_id: i64,
        rows: BTreeMap<i64, category::Model>,
    }

    #[derive(Default)]
    pub struct MemoryCategoryRepository {
        table: Mutex<Table>,
    }

    #[async_trait]
    impl CategoryRepository for MemoryCategoryRepository {
        async fn list(&self) -> Result<Vec<category::Model>, ServiceError> {
            Ok(self.table.lock().await.rows.values().cloned().collect())
        }

        async fn get(&self, id: i64) -> Result<Option<category::Model>, ServiceError> {
            Ok(self.table.lock().await.rows.get(&id).cloned())
        }

        async fn create(&self, name: &str, description: Option<String>) -> Result<category::Model, ServiceError> {
            let mut t = self.table.lock().await;
            t.next_id += 1;
            let row = category::Model {
                id: t.next_id,
                name: name.to_string(),
                description,
                create_time: Utc::now().into(),
            };
            t.rows.insert(row.id, row.clone());
            Ok(row)
        }

        async fn update(&self, id: i64, name: &str, description: Option<String>) -> Result<Option<category::Model>, ServiceError> {
            let mut t = self.table.lock().await;
            let Some(row) = t.rows.get_mut(&id) else { return Ok(None) };
            row.name = name.to_string();
            row.description = description;
            Ok(Some(row.clone()))
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.table.lock().await.rows.remove(&id).is_some())
        }
    }
}
