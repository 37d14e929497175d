use async_trait::async_trait;
use models::qa;

use crate::errors::ServiceError;

/// Fields written on create and update
#[derive(Debug, Clone)]
pub struct QaFields {
    pub question: String,
    pub answer: String,
    pub category_id: Option<i64>,
}

#[async_trait]
pub trait QaRepository: Send + Sync {
    /// One page in ascending id order, plus the total row count.
    async fn list_page(&self, page: u64, size: u64) -> Result<(Vec<qa::Model>, u64), ServiceError>;
    /// Bump `view_count`, refresh `update_time` and return the updated row; `None` when the id does not exist.
    async fn view(&self, id: i64) -> Result<Option<qa::Model>, ServiceError>;
    async fn create(&self, fields: QaFields, create_user_id: i64) -> Result<qa::Model, ServiceError>;
    /// `None` when the id does not exist.
    async fn update(&self, id: i64, fields: QaFields) -> Result<Option<qa::Model>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    /// Bump `like_count` and refresh `update_time`; false when the id does not exist.
    async fn like(&self, id: i64) -> Result<bool, ServiceError>;
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
        rows: BTreeMap<i64, qa::Model>,
    }

    #[derive(Default)]
    pub struct MemoryQaRepository {
        table: Mutex<Table>,
    }

    #[async_trait]
    impl QaRepository for MemoryQaRepository {
        async fn list_page(&self, page: u64, size: u64) -> Result<(Vec<qa::Model>, u64), ServiceError> {
            let t = self.table.lock().await;
            let content = t.rows
                .values()
                .skip(page.saturating_mul(size) as usize)
                .take(size as usize)
                .cloned()
                .collect();
            Ok((content, t.rows.len() as u64))
        }

        async fn view(&self, id: i64) -> Result<Option<qa::Model>, ServiceError> {
            let mut t = self.table.lock().await;
            Ok(t.rows.get_mut(&id).map(|row| {
                row.view_count += 1;
                row.update_time = Utc::now().into();
                row.clone()
            }))
        }

        async fn create(&self, fields: QaFields, create_user_id: i64) -> Result<qa::Model, ServiceError> {
            let mut t = self.table.lock().await;
            t.next_id += 1;
            let now = Utc::now().into();
            let row = qa::Model {
                id: t.next_id,
                question: fields.question,
                answer: fields.answer,
                category_id: fields.category_id,
                source: qa::SOURCE_MANUAL.to_string(),
                source_doc_id: None,
                view_count: 0,
                like_count: 0,
                create_user_id: Some(create_user_id),
                create_time: now,
                update_time: now,
            };
            t.rows.insert(row.id, row.clone());
            Ok(row)
        }

        async fn update(&self, id: i64, fields: QaFields) -> Result<Option<qa::Model>, ServiceError> {
            let mut t = self.table.lock().await;
            let Some(row) = t.rows.get_mut(&id) else { return Ok(None) };
            row.question = fields.question;
            row.answer = fields.answer;
            row.category_id = fields.category_id;
            row.update_time = Utc::now().into();
            Ok(Some(row.clone()))
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.table.lock().await.rows.remove(&id).is_some())
        }

        async fn like(&self, id: i64) -> Result<bool, ServiceError> {
            let mut t = self.table.lock().await;
            Ok(t.rows
                .get_mut(&id)
                .map(|row| {
                    row.like_count += 1;
                    row.update_time = Utc::now().into();
                })
                .is_some())
        }
    }
}
