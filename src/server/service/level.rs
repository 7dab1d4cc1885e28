use crate::{
    model::level::MemberExpDto,
    server::{
        data::{api::AztraApi, level::LevelRepository},
        error::AppError,
    },
};

pub struct LevelService<'a> {
    api: AztraApi<'a>,
}

impl<'a> LevelService<'a> {
    pub fn new(api: AztraApi<'a>) -> Self {
        Self { api }
    }

    /// Exp ranking, highest first; ties keep member id order.
    pub async fn ranking(&self, guild_id: u64) -> Result<Vec<MemberExpDto>, AppError> {
        let mut exps = LevelRepository::new(self.api).get_exps(guild_id).await?;
        exps.sort_by(|a, b| b.exp.cmp(&a.exp).then(a.member.cmp(&b.member)));
        Ok(exps)
    }

    /// Sets a member's exp; `0` resets it.
    pub async fn set_exp(&self, guild_id: u64, member_id: u64, exp: u64) -> Result<(), AppError> {
        LevelRepository::new(self.api)
            .set_exp(guild_id, member_id, exp)
            .await
    }
}
