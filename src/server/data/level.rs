use crate::{
    model::level::{ExpPatchDto, MemberExpDto},
    server::{data::api::AztraApi, error::AppError},
};

pub struct LevelRepository<'a> {
    api: AztraApi<'a>,
}

impl<'a> LevelRepository<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    pub async fn get_exps(&self, guild_id: u64) -> Result<Vec<MemberExpDto>, AppError> {
        self.api.get(&format!("/servers/{}/exps", guild_id)).await
    }

    pub async fn set_exp(&self, guild_id: u64, member_id: u64, exp: u64) -> Result<(), AppError> {
        self.api
            .patch(
                &format!("/servers/{}/exps/{}", guild_id, member_id),
                &ExpPatchDto { exp },
            )
            .await
    }
}
