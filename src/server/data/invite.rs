use crate::{
    model::invite::InviteDto,
    server::{
        data::api::{segment, AztraApi},
        error::AppError,
    },
};

pub struct InviteRepository<'a> {
    api: AztraApi<'a>,
}

impl<'a> InviteRepository<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    pub async fn get(&self, invite_id: &str) -> Result<InviteDto, AppError> {
        self.api
            .get(&format!("/invites/{}", segment(invite_id)))
            .await
    }

    /// Adds the token's owner to the invite's guild.
    ///
    /// The handle must carry a token granted with the `guilds.join` scope.
    pub async fn join(&self, invite_id: &str) -> Result<(), AppError> {
        self.api
            .post_empty::<()>(&format!("/invites/{}/join", segment(invite_id)), None)
            .await
    }
}
