//! Discord records as relayed by the Aztra API, plus CDN URL builders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::snowflake;

pub const DISCORD_CDN_URL: &str = "https://cdn.discordapp.com";

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DiscordUserDto {
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub username: String,
    /// `"0"` or absent for accounts migrated to unique usernames.
    #[serde(default)]
    pub discriminator: Option<String>,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

impl DiscordUserDto {
    /// `name#1234` for legacy accounts, the bare username otherwise.
    pub fn tag(&self) -> String {
        match self.legacy_discriminator() {
            Some(discriminator) => format!("{}#{}", self.username, discriminator),
            None => self.username.clone(),
        }
    }

    pub fn avatar_url(&self, size: u32) -> String {
        avatar_url(
            self.id,
            self.avatar.as_deref(),
            self.legacy_discriminator(),
            size,
        )
    }

    fn legacy_discriminator(&self) -> Option<&str> {
        self.discriminator
            .as_deref()
            .filter(|d| !d.is_empty() && *d != "0")
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MemberDto {
    pub user: DiscordUserDto,
    #[serde(default)]
    pub nick: Option<String>,
    pub joined_at: DateTime<Utc>,
    #[serde(default, with = "snowflake::vec")]
    #[cfg_attr(feature = "server", schema(value_type = Vec<String>))]
    pub roles: Vec<u64>,
}

impl MemberDto {
    pub fn id(&self) -> u64 {
        self.user.id
    }

    /// Nickname, then global display name, then username.
    pub fn display_name(&self) -> &str {
        self.nick
            .as_deref()
            .or(self.user.global_name.as_deref())
            .unwrap_or(&self.user.username)
    }

    pub fn tag(&self) -> String {
        self.user.tag()
    }

    pub fn is_bot(&self) -> bool {
        self.user.bot
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RoleDto {
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub name: String,
    pub position: i64,
    #[serde(default)]
    pub color: u32,
    /// Permission bitfield, sent by Discord as a decimal string.
    #[serde(default, with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub permissions: u64,
    #[serde(default)]
    pub managed: bool,
}

impl RoleDto {
    /// CSS colour of the role, `None` for the uncoloured default.
    pub fn color_hex(&self) -> Option<String> {
        (self.color != 0).then(|| format!("#{:06x}", self.color))
    }
}

/// Discord channel type, stored on the wire as its numeric code.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(from = "u8", into = "u8")]
pub enum ChannelKind {
    Text,
    Voice,
    Category,
    News,
    Stage,
    Forum,
    Other(u8),
}

impl From<u8> for ChannelKind {
    fn from(code: u8) -> Self {
        match code {
            0 => ChannelKind::Text,
            2 => ChannelKind::Voice,
            4 => ChannelKind::Category,
            5 => ChannelKind::News,
            13 => ChannelKind::Stage,
            15 => ChannelKind::Forum,
            other => ChannelKind::Other(other),
        }
    }
}

impl From<ChannelKind> for u8 {
    fn from(kind: ChannelKind) -> Self {
        match kind {
            ChannelKind::Text => 0,
            ChannelKind::Voice => 2,
            ChannelKind::Category => 4,
            ChannelKind::News => 5,
            ChannelKind::Stage => 13,
            ChannelKind::Forum => 15,
            ChannelKind::Other(code) => code,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ChannelDto {
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "server", schema(value_type = u8))]
    pub kind: ChannelKind,
    #[serde(default)]
    pub position: i64,
    #[serde(default, with = "snowflake::option")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub parent_id: Option<u64>,
}

impl ChannelDto {
    /// Channels that can carry bot messages.
    pub fn is_text_based(&self) -> bool {
        matches!(self.kind, ChannelKind::Text | ChannelKind::News)
    }
}

/// Guild entry from the user's guild list (`/users/@me/guilds`).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PartialGuildDto {
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    #[serde(default, with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub permissions: u64,
}

impl PartialGuildDto {
    pub fn icon_url(&self, size: u32) -> Option<String> {
        guild_icon_url(self.id, self.icon.as_deref(), size)
    }

    pub fn acronym(&self) -> String {
        guild_acronym(&self.name)
    }
}

/// Full guild record (`/discord/guilds/{guild_id}`).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GuildDto {
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub owner_id: u64,
    #[serde(default)]
    pub approximate_member_count: Option<u64>,
}

impl GuildDto {
    pub fn icon_url(&self, size: u32) -> Option<String> {
        guild_icon_url(self.id, self.icon.as_deref(), size)
    }

    pub fn acronym(&self) -> String {
        guild_acronym(&self.name)
    }
}

/// Entry of the guild selector: a guild the user may manage.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ManageableGuildDto {
    pub guild: PartialGuildDto,
    /// Adds the bot to this guild with the guild preselected.
    pub bot_invite_url: String,
}

/// Builds a user avatar URL, falling back to Discord's default avatars.
///
/// Animated hashes (`a_` prefix) resolve to GIFs. Without a hash, legacy
/// accounts use `discriminator % 5` and migrated accounts `(id >> 22) % 6`.
pub fn avatar_url(user_id: u64, avatar: Option<&str>, discriminator: Option<&str>, size: u32) -> String {
    match avatar {
        Some(hash) => {
            let ext = if hash.starts_with("a_") { "gif" } else { "png" };
            format!(
                "{}/avatars/{}/{}.{}?size={}",
                DISCORD_CDN_URL, user_id, hash, ext, size
            )
        }
        None => {
            let index = discriminator
                .and_then(|d| d.parse::<u64>().ok())
                .filter(|d| *d != 0)
                .map(|d| d % 5)
                .unwrap_or((user_id >> 22) % 6);
            format!("{}/embed/avatars/{}.png", DISCORD_CDN_URL, index)
        }
    }
}

pub fn guild_icon_url(guild_id: u64, icon: Option<&str>, size: u32) -> Option<String> {
    icon.map(|hash| {
        let ext = if hash.starts_with("a_") { "gif" } else { "png" };
        format!(
            "{}/icons/{}/{}.{}?size={}",
            DISCORD_CDN_URL, guild_id, hash, ext, size
        )
    })
}

/// Initials shown in place of a missing guild icon, e.g. `"Aztra Support"` -> `"AS"`.
pub fn guild_acronym(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(discriminator: Option<&str>, avatar: Option<&str>) -> DiscordUserDto {
        DiscordUserDto {
            id: 123456789012345678,
            username: "aztra".to_string(),
            discriminator: discriminator.map(str::to_string),
            global_name: None,
            avatar: avatar.map(str::to_string),
            bot: false,
        }
    }

    #[test]
    fn tag_includes_legacy_discriminator() {
        assert_eq!(user(Some("0420"), None).tag(), "aztra#0420");
        assert_eq!(user(Some("0"), None).tag(), "aztra");
        assert_eq!(user(None, None).tag(), "aztra");
    }

    #[test]
    fn avatar_url_uses_gif_for_animated_hash() {
        let url = user(None, Some("a_abc")).avatar_url(64);
        assert_eq!(
            url,
            "https://cdn.discordapp.com/avatars/123456789012345678/a_abc.gif?size=64"
        );
    }

    #[test]
    fn default_avatar_depends_on_account_kind() {
        assert_eq!(
            user(Some("0007"), None).avatar_url(64),
            "https://cdn.discordapp.com/embed/avatars/2.png"
        );

        let index = (123456789012345678u64 >> 22) % 6;
        assert_eq!(
            user(None, None).avatar_url(64),
            format!("https://cdn.discordapp.com/embed/avatars/{}.png", index)
        );
    }

    #[test]
    fn display_name_prefers_nickname() {
        let mut member = MemberDto {
            user: user(None, None),
            nick: Some("Nick".to_string()),
            joined_at: Utc::now(),
            roles: Vec::new(),
        };
        assert_eq!(member.display_name(), "Nick");

        member.nick = None;
        member.user.global_name = Some("Global".to_string());
        assert_eq!(member.display_name(), "Global");

        member.user.global_name = None;
        assert_eq!(member.display_name(), "aztra");
    }

    #[test]
    fn channel_kind_round_trips_unknown_codes() {
        let channel: ChannelDto = serde_json::from_value(serde_json::json!({
            "id": "1", "name": "thread", "type": 11, "position": 3
        }))
        .unwrap();
        assert_eq!(channel.kind, ChannelKind::Other(11));
        assert_eq!(serde_json::to_value(&channel).unwrap()["type"], 11);
    }

    #[test]
    fn role_color_hex_skips_default_color() {
        let mut role = RoleDto {
            id: 1,
            name: "Mod".to_string(),
            position: 1,
            color: 0,
            permissions: 0,
            managed: false,
        };
        assert_eq!(role.color_hex(), None);
        role.color = 0x3498db;
        assert_eq!(role.color_hex().as_deref(), Some("#3498db"));
    }

    #[test]
    fn guild_acronym_takes_word_initials() {
        assert_eq!(guild_acronym("Aztra Support Server"), "ASS");
        assert_eq!(guild_icon_url(1, None, 128), None);
    }
}
