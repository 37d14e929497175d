use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use models::category;
use service::category::CategoryInput;

use crate::errors::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

type IdPath = WithRejection<Path<i64>, ApiError>;
type Body = WithRejection<Json<CategoryInput>, ApiError>;

#[utoipa::path(get, path = "/api/categories", tag = "category", responses((status = 200, description = "All categories", body = [crate::openapi::CategoryDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<ApiResponse<Vec<category::Model>>, ApiError> {
    Ok(ApiResponse::success(state.categories.list().await?))
}

#[utoipa::path(
    get, path = "/api/categories/{id}", tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    responses((status = 200, description = "Category", body = crate::openapi::CategoryDoc), (status = 404, description = "Not found"))
)]
pub async fn get(State(state): State<AppState>, WithRejection(Path(id), _): IdPath) -> Result<ApiResponse<category::Model>, ApiError> {
    Ok(ApiResponse::success(state.categories.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/categories", tag = "category",
    request_body = crate::openapi::CategoryRequest,
    responses((status = 200, description = "Created", body = crate::openapi::CategoryDoc), (status = 400, description = "Invalid name"))
)]
pub async fn create(State(state): State<AppState>, WithRejection(Json(input), _): Body) -> Result<ApiResponse<category::Model>, ApiError> {
    Ok(ApiResponse::success(state.categories.create(input).await?))
}

#[utoipa::path(
    put, path = "/api/categories/{id}", tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    request_body = crate::openapi::CategoryRequest,
    responses((status = 200, description = "Updated", body = crate::openapi::CategoryDoc), (status = 404, description = "Not found"))
)]
pub async fn update(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(input), _): Body,
) -> Result<ApiResponse<category::Model>, ApiError> {
    Ok(ApiResponse::success(state.categories.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/categories/{id}", tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    responses((status = 200, description = "Deleted, or nothing to delete"))
)]
pub async fn delete(State(state): State<AppState>, WithRejection(Path(id), _): IdPath) -> Result<ApiResponse<()>, ApiError> {
    state.categories.delete(id).await?;
    Ok(ApiResponse::empty())
}
