//! HTTP error type.
//!
//! Every variant renders as `{"detail": "<message>"}` with a matching status
//! code.  Failed transcriptions never reach this type: they are successful
//! zero-score evaluations.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::lessons::LessonError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Lesson(#[from] LessonError),

    #[error("invalid upload: {message}")]
    Multipart { status: StatusCode, message: String },

    #[error("missing form field: {0}")]
    MissingField(&'static str),
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::Multipart {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Lesson(LessonError::LessonNotFound(_))
            | ApiError::Lesson(LessonError::DialogueNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Lesson(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Multipart { status, .. } => *status,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("api: {self}");
        } else {
            log::debug!("api: {status}: {self}");
        }
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
