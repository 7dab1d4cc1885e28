use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::statistics::StatisticsDto,
};

pub async fn get_statistics(guild_id: u64) -> Result<StatisticsDto, ApiError> {
    let url = format!("/api/guilds/{}/statistics", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
