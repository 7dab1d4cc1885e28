use chrono::Utc;
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::invite::InviteViewDto,
    server::{
        data::{api::AztraApi, invite::InviteRepository},
        error::AppError,
        middleware::{auth::AuthGuard, session::InviteSession},
    },
};

/// Dashboard invites: viewing them and joining their guild.
pub struct InviteService<'a> {
    http_client: &'a reqwest::Client,
    api_url: &'a str,
    session: &'a Session,
}

impl<'a> InviteService<'a> {
    pub fn new(http_client: &'a reqwest::Client, api_url: &'a str, session: &'a Session) -> Self {
        Self {
            http_client,
            api_url,
            session,
        }
    }

    /// Invite details plus whether this session can join or already has.
    ///
    /// Invites are public; the lookup does not need a login.
    pub async fn view(&self, invite_id: &str) -> Result<InviteViewDto, AppError> {
        let invite = InviteRepository::new(AztraApi::anonymous(self.http_client, self.api_url))
            .get(invite_id)
            .await?;

        let invites = InviteSession::new(self.session);
        let can_join = invites.get_token().await?.is_some();
        let joined = invites.has_joined(invite_id).await?;

        Ok(InviteViewDto {
            invite,
            can_join,
            joined,
        })
    }

    /// Joins the invite's guild with the session's `guilds.join` token.
    ///
    /// # Returns
    /// - `Ok(())` - Joined, or this session already had
    /// - `Err(AuthError::InviteTokenMissing)` - User must log in through the invite first (401)
    /// - `Err(AppError::BadRequest)` - Invite expired or already used
    pub async fn join(&self, invite_id: &str) -> Result<(), AppError> {
        let invites = InviteSession::new(self.session);
        if invites.has_joined(invite_id).await? {
            return Ok(());
        }

        let token = AuthGuard::new(self.session).require_invite_token().await?;
        let repo = InviteRepository::new(AztraApi::new(self.http_client, self.api_url, &token));

        let invite = repo.get(invite_id).await?;
        if invite.used {
            return Err(AppError::BadRequest(
                "This invite has already been used.".to_string(),
            ));
        }
        if invite.is_expired(Utc::now()) {
            return Err(AppError::BadRequest("This invite has expired.".to_string()));
        }

        repo.join(invite_id).await?;
        invites.mark_joined(invite_id).await?;

        tracing::info!("Joined guild {} through invite {}", invite.guild.id, invite_id);

        Ok(())
    }
}
