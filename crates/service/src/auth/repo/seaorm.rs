use sea_orm::DatabaseConnection;

use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;
use models::user;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, AuthError> {
        Ok(user::find_by_username(&self.db, username).await?)
    }

    async fn create_user(&self, username: &str, password_hash: String) -> Result<user::Model, AuthError> {
        Ok(user::create(&self.db, username, password_hash, None, user::ROLE_USER).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sea_orm::EntityTrait;

    use super::SeaOrmAuthRepository;
    use crate::auth::domain::{LoginInput, RegisterInput};
    use crate::auth::errors::AuthError;
    use crate::auth::service::{AuthConfig, AuthService};
    use crate::test_support::get_db;

    fn unique_name(prefix: &str) -> String {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        format!("{prefix}_{nanos}")
    }

    #[tokio::test]
    async fn register_login_against_postgres() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let svc = AuthService::new(Arc::new(SeaOrmAuthRepository { db: db.clone() }), AuthConfig::default());

        let username = unique_name("pg_user");
        let user = svc.register(RegisterInput { username: username.clone(), password: "pw".into() }).await?;
        assert_eq!(user.role, "USER");
        assert_ne!(user.password, "pw");

        let again = svc.register(RegisterInput { username: username.clone(), password: "pw".into() }).await;
        assert!(matches!(again, Err(AuthError::Conflict)));

        let session = svc.login(LoginInput { username: username.clone(), password: "pw".into() }).await?;
        assert_eq!(session.token, format!("mock-token-{}", user.id));

        models::user::Entity::delete_by_id(user.id).exec(&db).await?;
        Ok(())
    }
}
