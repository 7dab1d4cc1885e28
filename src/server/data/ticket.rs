use crate::{
    model::ticket::{TicketDto, TicketSetDto, TicketSetPatchDto, TicketSetPostDto},
    server::{
        data::api::{segment, AztraApi},
        error::AppError,
    },
};

pub struct TicketRepository<'a> {
    api: AztraApi<'a>,
}

impl<'a> TicketRepository<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    fn ticket_set_path(guild_id: u64, uuid: &str) -> String {
        format!("/servers/{}/ticketsets/{}", guild_id, segment(uuid))
    }

    pub async fn get_ticket_sets(&self, guild_id: u64) -> Result<Vec<TicketSetDto>, AppError> {
        self.api
            .get(&format!("/servers/{}/ticketsets", guild_id))
            .await
    }

    pub async fn get_ticket_set(&self, guild_id: u64, uuid: &str) -> Result<TicketSetDto, AppError> {
        self.api.get(&Self::ticket_set_path(guild_id, uuid)).await
    }

    pub async fn create_ticket_set(
        &self,
        guild_id: u64,
        ticket_set: &TicketSetPostDto,
    ) -> Result<(), AppError> {
        self.api
            .post_empty(&format!("/servers/{}/ticketsets", guild_id), Some(ticket_set))
            .await
    }

    pub async fn update_ticket_set(
        &self,
        guild_id: u64,
        uuid: &str,
        patch: &TicketSetPatchDto,
    ) -> Result<(), AppError> {
        self.api
            .patch(&Self::ticket_set_path(guild_id, uuid), patch)
            .await
    }

    pub async fn delete_ticket_set(&self, guild_id: u64, uuid: &str) -> Result<(), AppError> {
        self.api.delete(&Self::ticket_set_path(guild_id, uuid)).await
    }

    /// Re-posts the "open a ticket" message. The API rate limits this per guild.
    pub async fn resend(&self, guild_id: u64, uuid: &str) -> Result<(), AppError> {
        self.api
            .post_empty::<()>(
                &format!("{}/resend", Self::ticket_set_path(guild_id, uuid)),
                None,
            )
            .await
    }

    pub async fn get_tickets(&self, guild_id: u64) -> Result<Vec<TicketDto>, AppError> {
        self.api.get(&format!("/servers/{}/tickets", guild_id)).await
    }
}
