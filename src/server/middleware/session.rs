//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the
//! methods for one concern:
//! - `AuthSession` - Aztra API token and the cached user profile
//! - `CsrfSession` - CSRF state for the OAuth redirect
//! - `LoginFlowSession` - where to return after login, pending invite
//! - `InviteSession` - `guilds.join` token and invites already accepted

use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::sanitize_redirect_path},
};

// Session key constants
const SESSION_AUTH_TOKEN: &str = "auth:token";
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_LOGIN_REDIRECT: &str = "login:redirect";
const SESSION_LOGIN_INVITE: &str = "login:invite";
const SESSION_INVITE_TOKEN: &str = "invite:token";
const SESSION_INVITE_JOINED: &str = "invite:joined";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the underlying Session reference, e.g. for `AuthGuard`.
    pub fn inner(&self) -> &Session {
        self.session
    }

    /// Stores the Aztra API bearer token after a successful login.
    ///
    /// The session id is cycled so a pre-login session cannot be fixated.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_TOKEN, token).await?;
        Ok(())
    }

    pub async fn get_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_TOKEN).await?)
    }

    /// Caches the logged-in user's profile so `/api/auth/user` avoids a round trip.
    pub async fn set_user(&self, user: &UserDto) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    pub async fn get_user(&self) -> Result<Option<UserDto>, AppError> {
        Ok(self.session.get::<UserDto>(SESSION_AUTH_USER).await?)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_token().await?.is_some())
    }

    /// Clears all data from the session, used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Tokens are stored when the OAuth redirect starts and consumed by the callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token; each token is usable once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// State that must survive the round trip to Discord and back.
pub struct LoginFlowSession<'a> {
    session: &'a Session,
}

impl<'a> LoginFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Remembers the page that required login. Unsafe targets are ignored.
    pub async fn set_redirect(&self, path: &str) -> Result<(), AppError> {
        if let Some(path) = sanitize_redirect_path(path) {
            self.session.insert(SESSION_LOGIN_REDIRECT, path).await?;
        }
        Ok(())
    }

    pub async fn take_redirect(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove(SESSION_LOGIN_REDIRECT).await?)
    }

    /// Marks the login as started from an invite page.
    pub async fn set_invite(&self, invite_id: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_LOGIN_INVITE, invite_id.to_string())
            .await?;
        Ok(())
    }

    pub async fn take_invite(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove(SESSION_LOGIN_INVITE).await?)
    }
}

/// Invite acceptance state.
pub struct InviteSession<'a> {
    session: &'a Session,
}

impl<'a> InviteSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the token granted with `guilds.join`, used only to accept invites.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_INVITE_TOKEN, token).await?;
        Ok(())
    }

    pub async fn get_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_INVITE_TOKEN).await?)
    }

    pub async fn mark_joined(&self, invite_id: &str) -> Result<(), AppError> {
        let mut joined = self.joined().await?;
        if !joined.iter().any(|id| id == invite_id) {
            joined.push(invite_id.to_string());
            self.session.insert(SESSION_INVITE_JOINED, joined).await?;
        }
        Ok(())
    }

    pub async fn has_joined(&self, invite_id: &str) -> Result<bool, AppError> {
        Ok(self.joined().await?.iter().any(|id| id == invite_id))
    }

    async fn joined(&self) -> Result<Vec<String>, AppError> {
        Ok(self
            .session
            .get::<Vec<String>>(SESSION_INVITE_JOINED)
            .await?
            .unwrap_or_default())
    }
}
