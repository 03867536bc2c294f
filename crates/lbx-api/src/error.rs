use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lbx_db::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(msg) | Self::Store(StoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            Self::Store(StoreError::NotFound) => {
                (StatusCode::NOT_FOUND, "Flashcard not found".to_string())
            }
            Self::Store(StoreError::Database(err)) => {
                // Log the detail, never leak it to the client
                tracing::error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
