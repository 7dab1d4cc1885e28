use crate::{
    model::autotask::{AutotaskDto, AutotaskPostDto},
    server::{
        data::api::{segment, AztraApi},
        error::AppError,
    },
};

pub struct AutotaskRepository<'a> {
    api: AztraApi<'a>,
}

impl<'a> AutotaskRepository<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<AutotaskDto>, AppError> {
        self.api
            .get(&format!("/servers/{}/autotasks", guild_id))
            .await
    }

    pub async fn create(&self, guild_id: u64, autotask: &AutotaskPostDto) -> Result<(), AppError> {
        self.api
            .post_empty(&format!("/servers/{}/autotasks", guild_id), Some(autotask))
            .await
    }

    pub async fn delete(&self, guild_id: u64, uuid: &str) -> Result<(), AppError> {
        self.api
            .delete(&format!("/servers/{}/autotasks/{}", guild_id, segment(uuid)))
            .await
    }
}
