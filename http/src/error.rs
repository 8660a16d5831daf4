use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lyricsync_application::ApplicationError;
use serde_json::json;

#[derive(Debug)]
pub enum HttpError {
    Validation { message: String },
    Internal { message: String },
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Validation { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            HttpError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
    }
}

pub fn error_mapper(error: ApplicationError) -> HttpError {
    match error {
        ApplicationError::Validation(message) => HttpError::Validation { message },
        other => HttpError::Internal {
            message: other.to_string(),
        },
    }
}
