use crate::{
    model::statistics::StatisticsDto,
    server::{data::api::AztraApi, error::AppError},
};

pub struct StatisticsRepository<'a> {
    api: AztraApi<'a>,
}

impl<'a> StatisticsRepository<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    pub async fn get(&self, guild_id: u64) -> Result<StatisticsDto, AppError> {
        self.api
            .get(&format!("/servers/{}/statistics", guild_id))
            .await
    }
}
