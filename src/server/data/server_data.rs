use crate::{
    model::server_data::{ServerDataDto, ServerDataPatchDto},
    server::{data::api::AztraApi, error::AppError},
};

pub struct ServerDataRepository<'a> {
    api: AztraApi<'a>,
}

impl<'a> ServerDataRepository<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    pub async fn get(&self, guild_id: u64) -> Result<ServerDataDto, AppError> {
        self.api
            .get(&format!("/servers/{}/serverdata", guild_id))
            .await
    }

    /// Sends only the fields present in `patch`.
    pub async fn update(&self, guild_id: u64, patch: &ServerDataPatchDto) -> Result<(), AppError> {
        self.api
            .patch(&format!("/servers/{}/serverdata", guild_id), patch)
            .await
    }
}
