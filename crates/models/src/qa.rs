use chrono::Utc;
use sea_orm::{entity::prelude::*, sea_query::Expr, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};

/// Entered by hand through the API.
pub const SOURCE_MANUAL: &str = "MANUAL";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "qa")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    pub category_id: Option<i64>,
    pub source: String,
    pub source_doc_id: Option<i64>,
    pub view_count: i32,
    pub like_count: i32,
    pub create_user_id: Option<i64>,
    pub create_time: DateTimeWithTimeZone,
    pub update_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_content(question: &str, answer: &str) -> Result<(), ModelError> {
    errors::require_text("question", question, None)?;
    errors::require_text("answer", answer, None)
}

/// Insert a hand-written entry with zeroed counters.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    question: &str,
    answer: &str,
    category_id: Option<i64>,
    create_user_id: Option<i64>,
) -> Result<Model, ModelError> {
    validate_content(question, answer)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        question: Set(question.to_string()),
        answer: Set(answer.to_string()),
        category_id: Set(category_id),
        source: Set(SOURCE_MANUAL.to_string()),
        source_doc_id: Set(None),
        view_count: Set(0),
        like_count: Set(0),
        create_user_id: Set(create_user_id),
        create_time: Set(now),
        update_time: Set(now),
        ..Default::default()
    };
    let created = am.insert(db).await?;
    Ok(created)
}

/// Overwrite question, answer and category. `None` when the row does not exist.
pub async fn update_content<C: ConnectionTrait>(
    db: &C,
    id: i64,
    question: &str,
    answer: &str,
    category_id: Option<i64>,
) -> Result<Option<Model>, ModelError> {
    validate_content(question, answer)?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = existing.into();
    am.question = Set(question.to_string());
    am.answer = Set(answer.to_string());
    am.category_id = Set(category_id);
    am.update_time = Set(Utc::now().into());
    let updated = am.update(db).await?;
    Ok(Some(updated))
}

/// `view_count += 1` and `update_time = now()` in a single statement; false when no row matched.
pub async fn increment_view<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, ModelError> {
    increment(db, id, Column::ViewCount).await
}

/// `like_count += 1` and `update_time = now()` in a single statement; false when no row matched.
pub async fn increment_like<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, ModelError> {
    increment(db, id, Column::LikeCount).await
}

async fn increment<C: ConnectionTrait>(db: &C, id: i64, counter: Column) -> Result<bool, ModelError> {
    let res = Entity::update_many()
        .col_expr(counter, Expr::col(counter).add(1))
        .col_expr(Column::UpdateTime, Expr::current_timestamp().into())
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}
