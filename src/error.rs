//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::booking::responses::ErrorResponse;
use crate::booking::EngineError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            AppError::Engine(EngineError::UnknownCategory(key)) => {
                tracing::error!("unknown booking category requested: {key}");
                (StatusCode::BAD_REQUEST, "unknown_category")
            }
        };

        let body = ErrorResponse {
            error_type: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
