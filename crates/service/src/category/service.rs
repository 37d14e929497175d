use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::category::repository::CategoryRepository;
use crate::errors::ServiceError;
use models::category;

/// Create/update body; update overwrites both fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub struct CategoryService<R: CategoryRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CategoryRepository + ?Sized> CategoryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<category::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<category::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("category"))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CategoryInput) -> Result<category::Model, ServiceError> {
        category::validate_name(&input.name)?;
        let created = self.repo.create(&input.name, input.description).await?;
        info!(category_id = created.id, "category_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: CategoryInput) -> Result<category::Model, ServiceError> {
        category::validate_name(&input.name)?;
        let updated = self.repo
            .update(id, &input.name, input.description)
            .await?
            .ok_or_else(|| ServiceError::not_found("category"))?;
        info!(category_id = id, "category_updated");
        Ok(updated)
    }

    /// Deleting a missing id is a no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let removed = self.repo.delete(id).await?;
        if removed {
            info!(category_id = id, "category_deleted");
        } else {
            debug!(category_id = id, "category delete matched nothing");
        }
        Ok(())
    }
}
