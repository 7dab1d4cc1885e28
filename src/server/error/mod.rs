//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type. It wraps the domain errors and
//! implements `IntoResponse` so handlers can return it directly.

pub mod auth;
pub mod backend;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, backend::BackendError, config::ConfigError, internal::InternalError,
    },
};

/// Top-level application error type.
///
/// Domain errors (`AuthError`, `BackendError`) map themselves to responses,
/// everything else becomes a 500 with the details logged server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// The Aztra API refused or failed a request.
    ///
    /// Delegates to `BackendError::into_response()`.
    #[error(transparent)]
    BackendErr(#[from] BackendError),

    /// Unexpected internal state.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// The Aztra API could not be reached.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Status the Aztra API answered with, if this error came from it.
    pub fn backend_status(&self) -> Option<u16> {
        match self {
            Self::BackendErr(err) => err.status(),
            _ => None,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 502 Bad Gateway - When the Aztra API is unreachable
/// - Variable - For `AuthErr` and `BackendErr`, delegated to the wrapped error
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BackendErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::ReqwestErr(err) => {
                tracing::error!("Failed to reach Aztra API: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "The Aztra API is currently unreachable.".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(status: u16) -> AppError {
        BackendError::Status {
            status,
            path: "/servers/1/ticketsets/a/resend".to_string(),
            message: "upstream".to_string(),
        }
        .into()
    }

    #[test]
    fn relayed_backend_statuses() {
        assert_eq!(backend(401).into_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(backend(403).into_response().status(), StatusCode::FORBIDDEN);
        assert_eq!(backend(404).into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            backend(429).into_response().status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn other_backend_statuses_become_bad_gateway() {
        assert_eq!(backend(500).into_response().status(), StatusCode::BAD_GATEWAY);
        assert_eq!(backend(400).into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn auth_errors_map_to_their_statuses() {
        let not_logged_in: AppError = AuthError::NotLoggedIn.into();
        assert_eq!(not_logged_in.into_response().status(), StatusCode::UNAUTHORIZED);

        let csrf: AppError = AuthError::CsrfValidationFailed.into();
        assert_eq!(csrf.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
