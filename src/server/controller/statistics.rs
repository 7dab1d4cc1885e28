use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, statistics::StatisticsDto},
    server::{
        data::statistics::StatisticsRepository, error::AppError, middleware::auth::AuthGuard,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATISTICS_TAG: &str = "statistics";

/// Gets raw statistics samples; the client buckets them into chart series.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/statistics",
    tag = STATISTICS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Member and message statistics", body = StatisticsDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&session).require().await?;

    let statistics = StatisticsRepository::new(state.api(&token))
        .get(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(statistics)))
}
