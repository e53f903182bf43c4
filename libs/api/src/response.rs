use std::sync::OnceLock;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    #[error("validation failed")]
    ValidationError(Vec<FieldError>),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ServerError(String),
}

/// One rejected form field and the reason, echoed back to the client.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, body) = match self {
            ApiError::ValidationError(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: "Please fix the highlighted fields.".to_string(),
                    errors: Some(errors),
                },
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    message,
                    errors: None,
                },
            ),
            ApiError::ServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    message,
                    errors: None,
                },
            ),
        };

        (status_code, Json(body)).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

static ERROR_CODES: OnceLock<Value> = OnceLock::new();

/// Resolves an error code to the user-facing message shipped in
/// `error-code.json`. The table is compiled in, so a stale code only ever
/// degrades to the generic message.
fn error_message(error_code: &str) -> String {
    let codes = ERROR_CODES.get_or_init(|| {
        serde_json::from_str(include_str!("error-code.json"))
            .unwrap_or(Value::Null)
    });

    codes[error_code]
        .as_str()
        .unwrap_or("Something went wrong. Please try again later.")
        .to_string()
}

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{:?}", e);
            ApiError::ServerError(error_message(error_code))
        })
    }
}
