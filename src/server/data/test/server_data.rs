use super::*;
use crate::{
    model::server_data::{ServerDataPatchDto, WarnAction},
    server::data::server_data::ServerDataRepository,
};

/// Tests only changed fields are sent on update.
///
/// Expected: PATCH body `{ "prefix": "!" }`
#[tokio::test]
async fn update_sends_partial_body() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            Method::GET,
            "/servers/3/serverdata",
            factory::server_data::create_server_data("a!"),
        )
        .with_status(Method::PATCH, "/servers/3/serverdata", StatusCode::NO_CONTENT)
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();
    let repo = ServerDataRepository::new(AztraApi::new(&http, &test.api_url, "token"));

    let current = repo.get(3).await?;
    assert_eq!(current.warn_action, WarnAction::Kick);

    let mut edited = current.clone();
    edited.prefix = "!".to_string();
    let patch: ServerDataPatchDto = current.diff(&edited);
    repo.update(3, &patch).await?;

    let request = test
        .last_request(Method::PATCH, "/servers/3/serverdata")
        .unwrap();
    assert_eq!(request.body, Some(json!({ "prefix": "!" })));

    Ok(())
}
