use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession, InviteSession, LoginFlowSession},
        },
        model::oauth::{INVITE_SCOPE, LOGIN_SCOPES},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct LoginParams {
    /// Dashboard path to return to after login.
    pub redirect: Option<String>,
}

/// Query parameters Discord appends to the OAuth callback.
///
/// `error` is set instead of `code` when the user cancels the consent screen.
#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

fn auth_service(state: &AppState) -> AuthService<'_> {
    AuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.api_url,
        &state.redirect_url,
    )
}

/// Starts the Discord login.
///
/// Remembers `redirect` (same-origin paths only) and the CSRF state in the
/// session, then redirects to Discord's consent screen.
///
/// # Returns
/// - `307 Temporary Redirect` - To the Discord authorize URL
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(
        ("redirect" = Option<String>, Query, description = "Path to return to after login")
    ),
    responses(
        (status = 307, description = "Redirect to Discord OAuth2"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(redirect) = params.redirect.as_deref() {
        LoginFlowSession::new(&session).set_redirect(redirect).await?;
    }

    let (url, csrf_token) = auth_service(&state).login_url(&LOGIN_SCOPES);
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Starts a login that also grants `guilds.join`, for accepting an invite.
///
/// # Returns
/// - `307 Temporary Redirect` - To the Discord authorize URL
#[utoipa::path(
    get,
    path = "/api/auth/login/invite/{invite_id}",
    tag = AUTH_TAG,
    params(
        ("invite_id" = String, Path, description = "Dashboard invite id")
    ),
    responses(
        (status = 307, description = "Redirect to Discord OAuth2"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_invite(
    State(state): State<AppState>,
    session: Session,
    Path(invite_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    LoginFlowSession::new(&session).set_invite(&invite_id).await?;

    let mut scopes = LOGIN_SCOPES.to_vec();
    scopes.push(INVITE_SCOPE);
    let (url, csrf_token) = auth_service(&state).login_url(&scopes);
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Handles the Discord OAuth callback.
///
/// Validates the CSRF state, has the Aztra API exchange the code and stores
/// the resulting token and user in the session. Logins started from an
/// invite return to that invite; others return to the remembered path.
///
/// # Returns
/// - `307 Temporary Redirect` - Back into the dashboard
/// - `400 Bad Request` - CSRF state mismatch or missing code
/// - `401 Unauthorized` - The Aztra API rejected the code
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("code" = Option<String>, Query, description = "Authorization code"),
        ("state" = Option<String>, Query, description = "CSRF state"),
        ("error" = Option<String>, Query, description = "Set when the user denied access")
    ),
    responses(
        (status = 307, description = "Logged in, redirect into the dashboard"),
        (status = 400, description = "Invalid OAuth state", body = ErrorDto),
        (status = 502, description = "Aztra API unavailable", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(error) = params.error {
        tracing::debug!("Discord login cancelled: {}", error);
        return Ok(Redirect::temporary(&format!("{}/login", state.app_url)));
    }

    validate_csrf(&session, params.state.as_deref()).await?;

    let code = params
        .code
        .ok_or_else(|| AppError::BadRequest("Missing authorization code".to_string()))?;
    let (token, user) = auth_service(&state).callback(&code).await?;

    let flow = LoginFlowSession::new(&session);
    let invite_id = flow.take_invite().await?;
    let redirect = flow.take_redirect().await?;

    let auth = AuthSession::new(&session);
    auth.set_token(token.access_token.clone()).await?;
    auth.set_user(&user).await?;

    tracing::info!("User {} logged into the dashboard", user.discord_id);

    let path = match invite_id {
        Some(invite_id) => {
            if token.has_scope(INVITE_SCOPE) {
                InviteSession::new(&session)
                    .set_token(token.access_token)
                    .await?;
            }
            format!("/invite/{}", invite_id)
        }
        None => redirect.unwrap_or_else(|| "/".to_string()),
    };

    Ok(Redirect::temporary(&format!("{}{}", state.app_url, path)))
}

/// Logs the user out by clearing the session.
///
/// # Returns
/// - `204 No Content` - Session cleared
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Gets the logged-in user.
///
/// # Returns
/// - `200 OK` - The user cached at login
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged-in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session).require().await?;

    let user = AuthSession::new(&session)
        .get_user()
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    Ok((StatusCode::OK, Json(user)))
}

async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match (stored_state, csrf_state) {
        (Some(stored), Some(received)) if stored == received => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
