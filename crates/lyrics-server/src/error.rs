use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use lyrics_model::{ErrorBody, LyricsError};
use serde::Serialize;

/// Shown for every failure that is neither a bad request nor a miss.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch lyrics";

/// JSON response rendered with two-space indentation.
pub struct PrettyJson<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.1) {
            Ok(body) => (
                self.0,
                [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(err = %e, "Failed to serialize response");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}

/// Handler-side wrapper that turns a [`LyricsError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub LyricsError);

impl From<LyricsError> for ApiError {
    fn from(err: LyricsError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            LyricsError::InvalidRequest => StatusCode::BAD_REQUEST,
            LyricsError::NotFound { .. } => StatusCode::NOT_FOUND,
            LyricsError::Upstream(_) | LyricsError::Timeout { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.0 {
            LyricsError::InvalidRequest => ErrorBody {
                error: LyricsError::InvalidRequest.to_string(),
                details: None,
            },
            LyricsError::NotFound { reason, details } => {
                tracing::info!(reason = %reason, "No lyrics for query");
                ErrorBody {
                    error: reason.to_string(),
                    details: Some(details),
                }
            }
            err => {
                tracing::error!(err = %err, "Lyrics fetch error");
                ErrorBody {
                    error: FETCH_FAILED_MESSAGE.to_string(),
                    details: Some(serde_json::Value::String(err.to_string())),
                }
            }
        };

        PrettyJson(status, body).into_response()
    }
}
