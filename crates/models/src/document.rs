use std::fmt;

use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub file_path: String,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub process_result: Option<String>,
    pub create_user_id: Option<i64>,
    pub create_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Processing status stored in `document.status`. Nothing drives transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DocumentStatus {
    Uploaded,
    Processing,
    Completed,
}

impl DocumentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStatus::Uploaded => "UPLOADED",
            DocumentStatus::Processing => "PROCESSING",
            DocumentStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default)]
pub struct NewDocument {
    pub title: String,
    pub file_path: String,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
    pub create_user_id: Option<i64>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewDocument) -> Result<Model, ModelError> {
    errors::require_text("title", &input.title, Some(200))?;
    errors::require_text("filePath", &input.file_path, Some(500))?;
    let am = ActiveModel {
        title: Set(input.title),
        file_path: Set(input.file_path),
        file_size: Set(input.file_size),
        file_type: Set(input.file_type),
        status: Set(DocumentStatus::Uploaded.to_string()),
        process_result: Set(None),
        create_user_id: Set(input.create_user_id),
        create_time: Set(Utc::now().into()),
        ..Default::default()
    };
    let created = am.insert(db).await?;
    Ok(created)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Remove by id; true when a row was deleted.
pub async fn delete_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

