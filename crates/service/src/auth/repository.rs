use async_trait::async_trait;
use models::user;

use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, AuthError>;
    /// Insert a user with role `USER` and no email. `password_hash` is stored as given.
    async fn create_user(&self, username: &str, password_hash: String) -> Result<user::Model, AuthError>;
}

/// In-memory repository for tests and doc examples
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryAuthRepository {
        // key: username
        users: Mutex<HashMap<String, user::Model>>,
    }

    #[async_trait]
    impl AuthRepository for MemoryAuthRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, AuthError> {
            let users = self.users.lock().await;
            Ok(users.get(username).cloned())
        }

        async fn create_user(&self, username: &str, password_hash: String) -> Result<user::Model, AuthError> {
            let mut users = self.users.lock().await;
            if users.contains_key(username) {
                return Err(AuthError::Conflict);
            }
            let user = user::Model {
                id: users.len() as i64 + 1,
                username: username.to_string(),
                password: password_hash,
                email: None,
                role: user::ROLE_USER.to_string(),
            };
            users.insert(username.to_string(), user.clone());
            Ok(user)
        }
    }
}
