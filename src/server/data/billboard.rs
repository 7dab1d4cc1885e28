use crate::{
    model::billboard::{BillboardDto, BillboardPatchDto, BillboardPostDto},
    server::{
        data::api::{segment, AztraApi},
        error::AppError,
    },
};

pub struct BillboardRepository<'a> {
    api: AztraApi<'a>,
}

impl<'a> BillboardRepository<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<BillboardDto>, AppError> {
        self.api
            .get(&format!("/servers/{}/billboards", guild_id))
            .await
    }

    pub async fn create(&self, guild_id: u64, billboard: &BillboardPostDto) -> Result<(), AppError> {
        self.api
            .post_empty(&format!("/servers/{}/billboards", guild_id), Some(billboard))
            .await
    }

    pub async fn update(
        &self,
        guild_id: u64,
        uuid: &str,
        patch: &BillboardPatchDto,
    ) -> Result<(), AppError> {
        self.api
            .patch(
                &format!("/servers/{}/billboards/{}", guild_id, segment(uuid)),
                patch,
            )
            .await
    }

    pub async fn delete(&self, guild_id: u64, uuid: &str) -> Result<(), AppError> {
        self.api
            .delete(&format!("/servers/{}/billboards/{}", guild_id, segment(uuid)))
            .await
    }
}
