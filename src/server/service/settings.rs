use crate::{
    model::server_data::{ServerDataDto, ServerDataPatchDto},
    server::{
        data::{api::AztraApi, server_data::ServerDataRepository},
        error::AppError,
    },
};

pub struct SettingsService<'a> {
    api: AztraApi<'a>,
}

impl<'a> SettingsService<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    pub async fn get(&self, guild_id: u64) -> Result<ServerDataDto, AppError> {
        ServerDataRepository::new(self.api).get(guild_id).await
    }

    /// Sends the changed fields to the API.
    ///
    /// # Returns
    /// - `Ok(())` - Settings updated
    /// - `Err(AppError::BadRequest)` - Patch changes nothing or sets an empty prefix
    pub async fn update(&self, guild_id: u64, patch: &ServerDataPatchDto) -> Result<(), AppError> {
        if patch.is_empty() {
            return Err(AppError::BadRequest("Nothing to update.".to_string()));
        }
        if patch
            .prefix
            .as_deref()
            .is_some_and(|prefix| prefix.trim().is_empty())
        {
            return Err(AppError::BadRequest("Prefix cannot be empty.".to_string()));
        }

        ServerDataRepository::new(self.api)
            .update(guild_id, patch)
            .await
    }
}
