use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use crate::qa::repository::{QaFields, QaRepository};
use models::qa;

/// Creator recorded on every new entry until requests carry an identity.
pub const MOCK_USER_ID: i64 = 1;

/// Create/update body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaInput {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl QaInput {
    fn into_fields(self) -> Result<QaFields, ServiceError> {
        qa::validate_content(&self.question, &self.answer)?;
        Ok(QaFields { question: self.question, answer: self.answer, category_id: self.category_id })
    }
}

pub struct QaService<R: QaRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: QaRepository + ?Sized> QaService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list(&self, pagination: Pagination) -> Result<Page<qa::Model>, ServiceError> {
        let (page, size) = pagination.normalize();
        let (content, total) = self.repo.list_page(page, size).await?;
        debug!(returned = content.len(), total, "qa page");
        Ok(Page::new(content, total, page, size))
    }

    /// Fetch one entry, counting the read as a view.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<qa::Model, ServiceError> {
        self.repo.view(id).await?.ok_or_else(|| ServiceError::not_found("qa"))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: QaInput) -> Result<qa::Model, ServiceError> {
        let fields = input.into_fields()?;
        let created = self.repo.create(fields, MOCK_USER_ID).await?;
        info!(qa_id = created.id, category_id = ?created.category_id, "qa_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: QaInput) -> Result<qa::Model, ServiceError> {
        let fields = input.into_fields()?;
        let updated = self.repo
            .update(id, fields)
            .await?
            .ok_or_else(|| ServiceError::not_found("qa"))?;
        info!(qa_id = id, "qa_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let removed = self.repo.delete(id).await?;
        info!(qa_id = id, removed, "qa_deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn like(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.like(id).await? {
            return Err(ServiceError::not_found("qa"));
        }
        info!(qa_id = id, "qa_liked");
        Ok(())
    }
}
