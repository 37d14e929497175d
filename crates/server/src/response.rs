use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

pub const SUCCESS_CODE: u16 = 200;
pub const SUCCESS_MESSAGE: &str = "success";

/// Uniform `{code, message, data}` body shared by every endpoint
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { code: SUCCESS_CODE, message: SUCCESS_MESSAGE.to_string(), data: Some(data) }
    }
}

impl ApiResponse<()> {
    /// Success with `data: null`
    pub fn empty() -> Self {
        Self { code: SUCCESS_CODE, message: SUCCESS_MESSAGE.to_string(), data: None }
    }

    pub fn failure(code: u16, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
