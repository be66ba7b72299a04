/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error envelope)
 * - AuthError / StoreError を統一的に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::services::members::StoreError;

/// Message clients receive for any credential failure. Kept deliberately
/// uniform so responses do not leak which check failed.
pub const AUTH_FAILED_MESSAGE: &str = "인증 실패";

/// Message telling the client to run its refresh flow and retry.
pub const REISSUE_TOKEN_MESSAGE: &str = "REISSUE_TOKEN";

// Error envelope: { "result": "ERROR", "error": { code, message, validations } }
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub result: &'static str,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    // Field-level failures; always empty outside request validation.
    pub validations: Vec<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized: {message}")]
    Unauthorized { message: &'static str },
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized { message } => {
                (StatusCode::UNAUTHORIZED, "401", message.to_string())
            }
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                "404",
                format!("{resource} not found"),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "500",
                "internal server error".to_string(),
            ),
        };

        let body = ErrorResponse {
            result: "ERROR",
            error: ErrorBody {
                code,
                message,
                validations: Vec::new(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            // Expired tokens get a distinct message so clients know to refresh.
            AuthError::ExpiredToken => Self::Unauthorized {
                message: REISSUE_TOKEN_MESSAGE,
            },
            AuthError::InvalidToken | AuthError::MemberNotFound(_) => Self::Unauthorized {
                message: AUTH_FAILED_MESSAGE,
            },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(_: StoreError) -> Self {
        // Lookup outage is not a credential problem
        AppError::Internal
    }
}
