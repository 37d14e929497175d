use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use tracing::info;

use service::auth::domain::{LoginInput, LoginSession, RegisterInput};

use crate::errors::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/auth/login", tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = crate::openapi::LoginSessionDoc),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "Unknown username"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<LoginInput>, ApiError>,
) -> Result<ApiResponse<LoginSession>, ApiError> {
    let session = state.auth.login(input).await?;
    Ok(ApiResponse::success(session))
}

#[utoipa::path(
    post, path = "/api/auth/register", tag = "auth",
    request_body = crate::openapi::RegisterRequest,
    responses(
        (status = 200, description = "Registered", body = crate::openapi::UserDoc),
        (status = 400, description = "Blank username or password"),
        (status = 409, description = "Username taken"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<RegisterInput>, ApiError>,
) -> Result<ApiResponse<models::user::Model>, ApiError> {
    let user = state.auth.register(input).await?;
    info!(user_id = user.id, "register ok");
    Ok(ApiResponse::success(user))
}
