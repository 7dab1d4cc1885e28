use super::*;
use crate::server::service::guild::{bot_invite_url, GuildService};
use factory::discord::{PartialGuildFactory, ADMINISTRATOR, MANAGE_GUILD};

async fn guild_list() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_json(
            Method::GET,
            "/discord/users/@me/guilds",
            json!([
                factory::create_partial_guild(1, MANAGE_GUILD),
                factory::create_partial_guild(2, 0),
                factory::create_partial_guild(3, ADMINISTRATOR),
                PartialGuildFactory::new().id(4).owner(true).build(),
                factory::create_partial_guild(5, 1 << 10),
            ]),
        )
        .with_json(
            Method::GET,
            "/discord/guilds/1",
            factory::discord::create_guild(1, "Aztra Support", 99),
        )
        .build()
        .await
        .unwrap()
}

/// Tests only guilds the user can manage are listed.
///
/// Expected: guilds 1 (Manage Server), 3 (Administrator), 4 (owner)
#[tokio::test]
async fn lists_manageable_guilds() -> Result<(), AppError> {
    let test = guild_list().await;
    let http = reqwest::Client::new();

    let guilds = GuildService::new(AztraApi::new(&http, &test.api_url, "token"), "1234")
        .manageable_guilds()
        .await?;

    let ids: Vec<u64> = guilds.iter().map(|g| g.guild.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(guilds[0].bot_invite_url, bot_invite_url("1234", 1));

    Ok(())
}

/// Tests a guild without Manage Server is refused before fetching it.
///
/// Expected: Err(AuthError::CannotManageGuild(2))
#[tokio::test]
async fn guild_requires_manage_permission() -> Result<(), AppError> {
    let test = guild_list().await;
    let http = reqwest::Client::new();
    let service = GuildService::new(AztraApi::new(&http, &test.api_url, "token"), "1234");

    let guild = service.guild(1).await?;
    assert_eq!(guild.name, "Aztra Support");

    let result = service.guild(2).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CannotManageGuild(2)))
    ));
    assert!(test.last_request(Method::GET, "/discord/guilds/2").is_none());

    Ok(())
}

/// Tests the bot invite link preselects the guild.
#[test]
fn bot_invite_url_preselects_guild() {
    let url = url::Url::parse(&bot_invite_url("1234", 55)).unwrap();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    assert_eq!(url.host_str(), Some("discord.com"));
    assert!(pairs.contains(&("client_id".to_string(), "1234".to_string())));
    assert!(pairs.contains(&("scope".to_string(), "bot applications.commands".to_string())));
    assert!(pairs.contains(&("guild_id".to_string(), "55".to_string())));
    assert!(pairs.contains(&("disable_guild_select".to_string(), "true".to_string())));
}
