use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use rand::rngs::OsRng;
use tracing::{info, debug, instrument};

use super::domain::{RegisterInput, LoginInput, LoginSession};
use super::errors::AuthError;
use super::repository::AuthRepository;
use super::token;
use models::user;

/// Auth service configuration
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Issue HS256 JWTs when set, placeholder tokens otherwise
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self { Self { jwt_secret: None, token_ttl_hours: 24 } }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository + ?Sized> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository + ?Sized> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a new user with an Argon2-hashed password and role `USER`.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::memory::MemoryAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(MemoryAuthRepository::default()), AuthConfig::default());
    /// let input = RegisterInput { username: "alice".into(), password: "secret".into() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.role, "USER");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> Result<user::Model, AuthError> {
        user::validate_username(&input.username)?;
        if input.password.trim().is_empty() {
            return Err(AuthError::Validation("password required".into()));
        }
        if let Some(existing) = self.repo.find_by_username(&input.username).await? {
            debug!(user_id = existing.id, "username taken");
            return Err(AuthError::Conflict);
        }

        let hash = hash_password(&input.password)?;
        let user = self.repo.create_user(&input.username, hash).await?;
        info!(user_id = user.id, username = %user.username, "user_registered");
        Ok(user)
    }

    /// Authenticate a user and issue a token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::memory::MemoryAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(MemoryAuthRepository::default()), AuthConfig::default());
    /// let user = tokio_test::block_on(svc.register(RegisterInput { username: "bob".into(), password: "pw".into() })).unwrap();
    /// let session = tokio_test::block_on(svc.login(LoginInput { username: "bob".into(), password: "pw".into() })).unwrap();
    /// assert_eq!(session.token, format!("mock-token-{}", user.id));
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<LoginSession, AuthError> {
        if input.username.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation("username and password required".into()));
        }
        let user = self.repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::NotFound)?;

        if !verify_password(&input.password, &user.password)? {
            debug!(user_id = user.id, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = token::issue(&user, self.cfg.jwt_secret.as_deref(), self.cfg.token_ttl_hours)?;
        info!(user_id = user.id, "user_logged_in");
        Ok(LoginSession { token, username: user.username, role: user.role })
    }

    /// User id referenced by a token issued by [`AuthService::login`].
    pub fn token_user_id(&self, token: &str) -> Result<i64, AuthError> {
        token::user_id(token, self.cfg.jwt_secret.as_deref())
    }
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}

fn verify_password(password: &str, stored: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored).map_err(|e| AuthError::HashError(e.to_string()))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::memory::MemoryAuthRepository;

    fn svc(secret: Option<&str>) -> AuthService<MemoryAuthRepository> {
        let cfg = AuthConfig { jwt_secret: secret.map(str::to_string), token_ttl_hours: 1 };
        AuthService::new(Arc::new(MemoryAuthRepository::default()), cfg)
    }

    fn register(name: &str, pw: &str) -> RegisterInput {
        RegisterInput { username: name.into(), password: pw.into() }
    }

    fn login(name: &str, pw: &str) -> LoginInput {
        LoginInput { username: name.into(), password: pw.into() }
    }

    #[tokio::test]
    async fn register_twice_conflicts() {
        let s = svc(None);
        let first = s.register(register("carol", "pw")).await.unwrap();
        assert_eq!(first.role, user::ROLE_USER);
        assert!(first.email.is_none());
        assert!(first.password.starts_with("$argon2"));
        assert!(matches!(s.register(register("carol", "other")).await, Err(AuthError::Conflict)));
    }

    #[tokio::test]
    async fn register_rejects_blank_fields() {
        let s = svc(None);
        assert!(matches!(s.register(register("  ", "pw")).await, Err(AuthError::Validation(_))));
        assert!(matches!(s.register(register("dave", " ")).await, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn login_outcomes() {
        let s = svc(None);
        let user = s.register(register("erin", "right")).await.unwrap();

        let session = s.login(login("erin", "right")).await.unwrap();
        assert_eq!(session.username, "erin");
        assert_eq!(session.role, "USER");
        assert_eq!(s.token_user_id(&session.token).unwrap(), user.id);

        assert!(matches!(s.login(login("erin", "wrong")).await, Err(AuthError::InvalidCredentials)));
        assert!(matches!(s.login(login("nobody", "right")).await, Err(AuthError::NotFound)));
    }

    #[tokio::test]
    async fn login_issues_jwt_when_configured() {
        let s = svc(Some("s3cret"));
        let user = s.register(register("frank", "pw")).await.unwrap();
        let session = s.login(login("frank", "pw")).await.unwrap();
        assert!(!session.token.starts_with(token::MOCK_TOKEN_PREFIX));
        assert_eq!(s.token_user_id(&session.token).unwrap(), user.id);
    }

    #[test]
    fn hash_is_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same", &a).unwrap());
        assert!(!verify_password("different", &b).unwrap());
    }
}
