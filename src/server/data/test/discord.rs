use super::*;
use crate::{model::discord::ChannelKind, server::data::discord::DiscordRepository};

/// Tests members are parsed from string snowflakes.
///
/// Expected: Ok with both members, nick preferred as display name
#[tokio::test]
async fn fetches_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            Method::GET,
            "/discord/guilds/10/members",
            json!([
                factory::discord::MemberFactory::new()
                    .id(1)
                    .username("alice")
                    .nick("Ally")
                    .roles(vec![5])
                    .build(),
                factory::create_member(2, "bob"),
            ]),
        )
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();

    let members = DiscordRepository::new(AztraApi::new(&http, &test.api_url, "token"))
        .members(10)
        .await?;

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].display_name(), "Ally");
    assert_eq!(members[0].roles, vec![5]);
    assert_eq!(members[1].tag(), "bob");

    Ok(())
}

/// Tests a guild the bot is not in surfaces as a 404 status.
///
/// Expected: backend status 404
#[tokio::test]
async fn missing_guild_is_not_found() {
    let test = TestBuilder::new()
        .with_status(Method::GET, "/discord/guilds/10", StatusCode::NOT_FOUND)
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();

    let result = DiscordRepository::new(AztraApi::new(&http, &test.api_url, "token"))
        .guild(10)
        .await;

    assert_eq!(result.err().and_then(|e| e.backend_status()), Some(404));
}

/// Tests roles keep their permission bits and colour.
///
/// Expected: Ok with the role parsed from string snowflakes
#[tokio::test]
async fn fetches_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            Method::GET,
            "/discord/guilds/10/roles",
            json!([factory::discord::create_role(5, "Moderator", 3)]),
        )
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();

    let roles = DiscordRepository::new(AztraApi::new(&http, &test.api_url, "token"))
        .roles(10)
        .await?;

    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].id, 5);
    assert_eq!(roles[0].position, 3);
    assert_eq!(roles[0].color, 0x3498db);
    assert!(!roles[0].managed);

    Ok(())
}

/// Tests channel types and parent categories are decoded.
///
/// Expected: category (type 4) and a text channel (type 0) under it
#[tokio::test]
async fn fetches_channels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            Method::GET,
            "/discord/guilds/10/channels",
            json!([
                factory::discord::create_channel(20, "General", 4, None),
                factory::discord::create_channel(21, "chat", 0, Some(20)),
            ]),
        )
        .build()
        .await
        .unwrap();
    let http = reqwest::Client::new();

    let channels = DiscordRepository::new(AztraApi::new(&http, &test.api_url, "token"))
        .channels(10)
        .await?;

    assert_eq!(channels[0].kind, ChannelKind::Category);
    assert_eq!(channels[0].parent_id, None);
    assert_eq!(channels[1].kind, ChannelKind::Text);
    assert_eq!(channels[1].parent_id, Some(20));

    Ok(())
}
