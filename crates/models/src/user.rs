use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    /// Argon2 PHC string; never leaves the server.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub email: Option<String>,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_username(username: &str) -> Result<(), ModelError> {
    errors::require_text("username", username, Some(50))
}

pub async fn find_by_username<C: ConnectionTrait>(db: &C, username: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::Username.eq(username))
        .one(db)
        .await?;
    Ok(found)
}

/// Insert a user. `password_hash` must already be hashed.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    username: &str,
    password_hash: String,
    email: Option<String>,
    role: &str,
) -> Result<Model, ModelError> {
    validate_username(username)?;
    if password_hash.trim().is_empty() {
        return Err(ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        username: Set(username.to_string()),
        password: Set(password_hash),
        email: Set(email),
        role: Set(role.to_string()),
        ..Default::default()
    };
    let created = am.insert(db).await?;
    Ok(created)
}
