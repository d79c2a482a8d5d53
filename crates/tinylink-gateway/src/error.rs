use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tinylink_core::ShortenerError;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("url is missing")]
    MissingUrl,
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("short code already in use: {0}")]
    ShortCodeTaken(String),
    #[error("short code not found")]
    ShortCodeNotFound,
    #[error("request body rejected: {message}")]
    InvalidBody { status: StatusCode, message: String },
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingUrl => StatusCode::BAD_REQUEST,
            AppError::InvalidShortCode(_) => StatusCode::PRECONDITION_FAILED,
            AppError::ShortCodeTaken(_) => StatusCode::CONFLICT,
            AppError::ShortCodeNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidBody { status, .. } => *status,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::MissingUrl => "Url not present".to_string(),
            AppError::InvalidShortCode(_) => "The provided shortcode is invalid".to_string(),
            AppError::ShortCodeTaken(_) => "Shortcode already in use".to_string(),
            AppError::ShortCodeNotFound => "Shortcode not found".to_string(),
            AppError::InvalidBody { message, .. } => message.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::MissingUrl => AppError::MissingUrl,
            ShortenerError::InvalidShortCode(message) => AppError::InvalidShortCode(message),
            ShortenerError::ShortCodeTaken(code) => AppError::ShortCodeTaken(code),
            ShortenerError::Storage(message) => AppError::Internal(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection {
            JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        AppError::InvalidBody {
            status,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(source) = &self {
            error!(error = %source, "request failed");
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
