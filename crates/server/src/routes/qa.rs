use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use utoipa::IntoParams;

use models::qa;
use service::pagination::{Page, Pagination, DEFAULT_PAGE_SIZE};
use service::qa::QaInput;

use crate::errors::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

type IdPath = WithRejection<Path<i64>, ApiError>;
type Body = WithRejection<Json<QaInput>, ApiError>;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 0-based page index
    pub page: Option<i64>,
    /// Page size, 1..=100
    pub size: Option<i64>,
}

impl From<PageQuery> for Pagination {
    fn from(q: PageQuery) -> Self {
        Pagination { page: q.page.unwrap_or(0), size: q.size.unwrap_or(DEFAULT_PAGE_SIZE) }
    }
}

#[utoipa::path(get, path = "/api/qa", tag = "qa", params(PageQuery), responses((status = 200, description = "One page of entries", body = crate::openapi::QaPageDoc)))]
pub async fn list(
    State(state): State<AppState>,
    WithRejection(Query(q), _): WithRejection<Query<PageQuery>, ApiError>,
) -> Result<ApiResponse<Page<qa::Model>>, ApiError> {
    Ok(ApiResponse::success(state.qa.list(q.into()).await?))
}

#[utoipa::path(
    get, path = "/api/qa/{id}", tag = "qa",
    params(("id" = i64, Path, description = "Qa id")),
    responses((status = 200, description = "Entry, after counting this view", body = crate::openapi::QaDoc), (status = 404, description = "Not found"))
)]
pub async fn get(State(state): State<AppState>, WithRejection(Path(id), _): IdPath) -> Result<ApiResponse<qa::Model>, ApiError> {
    Ok(ApiResponse::success(state.qa.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/qa", tag = "qa",
    request_body = crate::openapi::QaRequest,
    responses((status = 200, description = "Created", body = crate::openapi::QaDoc), (status = 400, description = "Blank question or answer"))
)]
pub async fn create(State(state): State<AppState>, WithRejection(Json(input), _): Body) -> Result<ApiResponse<qa::Model>, ApiError> {
    Ok(ApiResponse::success(state.qa.create(input).await?))
}

#[utoipa::path(
    put, path = "/api/qa/{id}", tag = "qa",
    params(("id" = i64, Path, description = "Qa id")),
    request_body = crate::openapi::QaRequest,
    responses((status = 200, description = "Updated", body = crate::openapi::QaDoc), (status = 404, description = "Not found"))
)]
pub async fn update(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(input), _): Body,
) -> Result<ApiResponse<qa::Model>, ApiError> {
    Ok(ApiResponse::success(state.qa.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/qa/{id}", tag = "qa",
    params(("id" = i64, Path, description = "Qa id")),
    responses((status = 200, description = "Deleted"))
)]
pub async fn delete(State(state): State<AppState>, WithRejection(Path(id), _): IdPath) -> Result<ApiResponse<()>, ApiError> {
    state.qa.delete(id).await?;
    Ok(ApiResponse::empty())
}

#[utoipa::path(
    post, path = "/api/qa/{id}/like", tag = "qa",
    params(("id" = i64, Path, description = "Qa id")),
    responses((status = 200, description = "Liked"), (status = 404, description = "Not found"))
)]
pub async fn like(State(state): State<AppState>, WithRejection(Path(id), _): IdPath) -> Result<ApiResponse<()>, ApiError> {
    state.qa.like(id).await?;
    Ok(ApiResponse::empty())
}
