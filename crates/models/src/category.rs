use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub create_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    errors::require_text("name", name, Some(100))
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, description: Option<String>) -> Result<Model, ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        description: Set(description),
        create_time: Set(Utc::now().into()),
        ..Default::default()
    };
    let created = am.insert(db).await?;
    Ok(created)
}

/// Overwrite name and description. `None` when the row does not exist.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i64,
    name: &str,
    description: Option<String>,
) -> Result<Option<Model>, ModelError> {
    validate_name(name)?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.description = Set(description);
    let updated = am.update(db).await?;
    Ok(Some(updated))
}
