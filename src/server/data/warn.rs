use crate::{
    model::warn::WarnDto,
    server::{
        data::api::{segment, AztraApi},
        error::AppError,
    },
};

pub struct WarnRepository<'a> {
    api: AztraApi<'a>,
}

impl<'a> WarnRepository<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<WarnDto>, AppError> {
        self.api.get(&format!("/servers/{}/warns", guild_id)).await
    }

    pub async fn delete(&self, guild_id: u64, uuid: &str) -> Result<(), AppError> {
        self.api
            .delete(&format!("/servers/{}/warns/{}", guild_id, segment(uuid)))
            .await
    }
}
