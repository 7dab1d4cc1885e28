use dioxus_logger::tracing;

use crate::{
    model::ticket::{TicketDto, TicketSetDto, TicketSetPatchDto, TicketSetPostDto},
    server::{
        data::{api::AztraApi, ticket::TicketRepository},
        error::AppError,
    },
};

pub struct TicketService<'a> {
    api: AztraApi<'a>,
}

impl<'a> TicketService<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    fn repo(&self) -> TicketRepository<'a> {
        TicketRepository::new(self.api)
    }

    pub async fn ticket_sets(&self, guild_id: u64) -> Result<Vec<TicketSetDto>, AppError> {
        self.repo().get_ticket_sets(guild_id).await
    }

    pub async fn ticket_set(&self, guild_id: u64, uuid: &str) -> Result<TicketSetDto, AppError> {
        self.repo().get_ticket_set(guild_id, uuid).await
    }

    pub async fn create_ticket_set(
        &self,
        guild_id: u64,
        ticket_set: &TicketSetPostDto,
    ) -> Result<(), AppError> {
        if ticket_set.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Ticket set name cannot be empty.".to_string(),
            ));
        }

        self.repo().create_ticket_set(guild_id, ticket_set).await
    }

    /// # Returns
    /// - `Err(AppError::BadRequest)` - Patch changes nothing
    pub async fn update_ticket_set(
        &self,
        guild_id: u64,
        uuid: &str,
        patch: &TicketSetPatchDto,
    ) -> Result<(), AppError> {
        if patch.is_empty() {
            return Err(AppError::BadRequest("Nothing to update.".to_string()));
        }

        self.repo().update_ticket_set(guild_id, uuid, patch).await
    }

    pub async fn delete_ticket_set(&self, guild_id: u64, uuid: &str) -> Result<(), AppError> {
        self.repo().delete_ticket_set(guild_id, uuid).await
    }

    /// Re-posts the ticket set message; a 429 from the API is passed on as is.
    pub async fn resend(&self, guild_id: u64, uuid: &str) -> Result<(), AppError> {
        let result = self.repo().resend(guild_id, uuid).await;

        if result.as_ref().err().and_then(AppError::backend_status) == Some(429) {
            tracing::debug!("Ticket message resend rate limited for guild {}", guild_id);
        }

        result
    }

    /// Tickets newest first.
    pub async fn tickets(&self, guild_id: u64) -> Result<Vec<TicketDto>, AppError> {
        let mut tickets = self.repo().get_tickets(guild_id).await?;
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tickets)
    }
}
