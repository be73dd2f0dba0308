use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lms_core::error::CoreError;
use lms_core::schema::ValidationError;
use lms_db::integrity::{self, ViolationKind};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Keeps the two rejection classes apart: schema errors (bad input shape,
/// 400) arrive as [`CoreError::Validation`]; constraint rejections from the
/// database arrive as [`AppError::Database`] and are classified into 409/422.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lms_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(err) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let AppError::Core(CoreError::Validation(err)) = &self {
            body["field"] = json!(err.field);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations map to 409.
/// - Foreign key, check and not-null violations map to 422.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    match integrity::classify(err) {
        Some(violation) => match violation.kind {
            ViolationKind::Unique => (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!(
                    "Duplicate value violates unique constraint: {}",
                    violation.constraint
                ),
            ),
            ViolationKind::ForeignKey => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INTEGRITY_ERROR",
                format!(
                    "Referenced row does not exist: {}",
                    violation.constraint
                ),
            ),
            ViolationKind::Check | ViolationKind::NotNull => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INTEGRITY_ERROR",
                violation.to_string(),
            ),
        },
        None => {
            tracing::error!(error = %err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
