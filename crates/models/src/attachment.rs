use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attachment")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub file_name: String,
    pub file_path: String,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
    pub related_id: Option<i64>,
    pub related_type: Option<String>,
    pub create_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default)]
pub struct NewAttachment {
    pub file_name: String,
    pub file_path: String,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
    pub related_id: Option<i64>,
    pub related_type: Option<String>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewAttachment) -> Result<Model, ModelError> {
    errors::require_text("fileName", &input.file_name, Some(200))?;
    errors::require_text("filePath", &input.file_path, Some(500))?;
    let am = ActiveModel {
        file_name: Set(input.file_name),
        file_path: Set(input.file_path),
        file_size: Set(input.file_size),
        file_type: Set(input.file_type),
        related_id: Set(input.related_id),
        related_type: Set(input.related_type),
        create_time: Set(Utc::now().into()),
        ..Default::default()
    };
    let created = am.insert(db).await?;
    Ok(created)
}

/// Attachments pointing at (`related_type`, `related_id`), oldest first.
pub async fn list_for<C: ConnectionTrait>(db: &C, related_type: &str, related_id: i64) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Column::RelatedType.eq(related_type))
        .filter(Column::RelatedId.eq(related_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn delete_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
