use super::*;
use crate::{
    model::server_data::ServerDataPatchDto, server::service::settings::SettingsService,
};

/// Tests an empty patch is refused without calling the API.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn empty_patch_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let http = reqwest::Client::new();

    let result = SettingsService::new(AztraApi::new(&http, &test.api_url, "token"))
        .update(1, &ServerDataPatchDto::default())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(test.requests().is_empty());

    Ok(())
}

/// Tests a blank prefix is refused.
#[tokio::test]
async fn blank_prefix_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let http = reqwest::Client::new();

    let patch = ServerDataPatchDto {
        prefix: Some("  ".to_string()),
        ..Default::default()
    };
    let result = SettingsService::new(AztraApi::new(&http, &test.api_url, "token"))
        .update(1, &patch)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
