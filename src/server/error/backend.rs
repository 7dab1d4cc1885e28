use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures answered by the Aztra API.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The API answered with a non-success status.
    #[error("Aztra API returned {status} for {path}: {message}")]
    Status {
        status: u16,
        path: String,
        message: String,
    },

    /// The API answered successfully but the body did not match the expected shape.
    #[error("Unexpected response body from Aztra API for {path}: {source}")]
    InvalidBody {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl BackendError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::InvalidBody { .. } => None,
        }
    }
}

/// Relays the statuses the dashboard reacts to and hides everything else.
///
/// - 401 → 401, the session's token was rejected
/// - 403 → 403, missing permission on the guild
/// - 404 → 404, usually the bot is not in the guild
/// - 429 → 429, asks the user to retry in one minute
/// - anything else → 502 Bad Gateway, logged
impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Status { status: 401, .. } => (
                StatusCode::UNAUTHORIZED,
                "Your session has expired, please log in again.".to_string(),
            ),
            Self::Status {
                status: 403,
                message,
                ..
            } => (StatusCode::FORBIDDEN, message.clone()),
            Self::Status {
                status: 404,
                message,
                ..
            } => (StatusCode::NOT_FOUND, message.clone()),
            Self::Status { status: 429, .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests, please try again in one minute.".to_string(),
            ),
            _ => {
                tracing::error!("{}", self);
                (
                    StatusCode::BAD_GATEWAY,
                    "The Aztra API could not handle this request.".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
