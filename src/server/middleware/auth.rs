use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, InviteSession},
};

/// Gate for handlers that act on the user's behalf.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the user's Aztra API token.
    ///
    /// # Returns
    /// - `Ok(String)` - Bearer token for the Aztra API
    /// - `Err(AppError::AuthErr(NotLoggedIn))` - No token in session, answered with 401
    pub async fn require(&self) -> Result<String, AppError> {
        AuthSession::new(self.session)
            .get_token()
            .await?
            .ok_or_else(|| AuthError::NotLoggedIn.into())
    }

    /// Returns the `guilds.join` token needed to accept an invite.
    pub async fn require_invite_token(&self) -> Result<String, AppError> {
        InviteSession::new(self.session)
            .get_token()
            .await?
            .ok_or_else(|| AuthError::InviteTokenMissing.into())
    }
}
