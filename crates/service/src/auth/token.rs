//! Bearer tokens handed out at login.
//!
//! Without a secret the token is the placeholder `mock-token-{id}`. With one it is an
//! HS256 JWT whose `uid` claim carries the user id.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::AuthError;
use models::user;

pub const MOCK_TOKEN_PREFIX: &str = "mock-token-";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: i64,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

pub fn issue(user: &user::Model, secret: Option<&str>, ttl_hours: i64) -> Result<String, AuthError> {
    let Some(secret) = secret else {
        return Ok(format!("{MOCK_TOKEN_PREFIX}{}", user.id));
    };
    let now = Utc::now();
    let claims = Claims {
        sub: user.username.clone(),
        uid: user.id,
        role: user.role.clone(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(ttl_hours)).timestamp() as usize,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AuthError::TokenError(e.to_string()))
}

/// Recover the user id from a token produced by [`issue`].
pub fn user_id(token: &str, secret: Option<&str>) -> Result<i64, AuthError> {
    if let Some(id) = token.strip_prefix(MOCK_TOKEN_PREFIX) {
        return id.parse::<i64>().map_err(|_| AuthError::TokenError("malformed mock token".into()));
    }
    let Some(secret) = secret else {
        return Err(AuthError::TokenError("jwt not enabled".into()));
    };
    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::new(Algorithm::HS256))
        .map_err(|e| AuthError::TokenError(e.to_string()))?;
    Ok(data.claims.uid)
}
