use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state in the callback URL does not match the one stored in the
    /// session. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No Aztra API token in the session.
    #[error("No access token in session")]
    NotLoggedIn,

    /// The invite flow needs a token granted with the `guilds.join` scope.
    #[error("No invite token in session")]
    InviteTokenMissing,

    /// The user lacks Manage Server on the guild.
    #[error("User is not allowed to manage guild {0}")]
    CannotManageGuild(u64),
}

/// Maps authentication errors to status codes with user-facing messages.
///
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `NotLoggedIn` / `InviteTokenMissing` → 401 Unauthorized
/// - `CannotManageGuild` → 403 Forbidden
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::NotLoggedIn => (StatusCode::UNAUTHORIZED, "You need to log in first."),
            Self::InviteTokenMissing => (
                StatusCode::UNAUTHORIZED,
                "Log in again to accept this invite.",
            ),
            Self::CannotManageGuild(_) => (
                StatusCode::FORBIDDEN,
                "You need the Manage Server permission on this server.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
