use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auth::{
    repo::seaorm::SeaOrmAuthRepository,
    repository::{memory::MemoryAuthRepository, AuthRepository},
    service::AuthConfig,
    AuthService,
};
use service::category::{
    repo::seaorm::SeaOrmCategoryRepository,
    repository::{memory::MemoryCategoryRepository, CategoryRepository},
    CategoryService,
};
use service::qa::{
    repo::seaorm::SeaOrmQaRepository,
    repository::{memory::MemoryQaRepository, QaRepository},
    QaService,
};

/// Services shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService<dyn AuthRepository>>,
    pub categories: Arc<CategoryService<dyn CategoryRepository>>,
    pub qa: Arc<QaService<dyn QaRepository>>,
}

impl AppState {
    pub fn new(
        auth_repo: Arc<dyn AuthRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        qa_repo: Arc<dyn QaRepository>,
        auth_cfg: AuthConfig,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(auth_repo, auth_cfg)),
            categories: Arc::new(CategoryService::new(category_repo)),
            qa: Arc::new(QaService::new(qa_repo)),
        }
    }

    /// SeaORM repositories sharing one pool
    pub fn with_database(db: DatabaseConnection, auth_cfg: AuthConfig) -> Self {
        Self::new(
            Arc::new(SeaOrmAuthRepository { db: db.clone() }),
            Arc::new(SeaOrmCategoryRepository { db: db.clone() }),
            Arc::new(SeaOrmQaRepository { db }),
            auth_cfg,
        )
    }

    /// Process-local repositories, used by router tests
    pub fn in_memory(auth_cfg: AuthConfig) -> Self {
        Self::new(
            Arc::new(MemoryAuthRepository::default()),
            Arc::new(MemoryCategoryRepository::default()),
            Arc::new(MemoryQaRepository::default()),
            auth_cfg,
        )
    }
}
