//! Per-guild bot settings (`/servers/{guild_id}/serverdata`).

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::snowflake;

/// Punishment applied once a member reaches the warn limit.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum WarnAction {
    #[default]
    None,
    Mute,
    Kick,
    Ban,
}

impl WarnAction {
    pub const ALL: [WarnAction; 4] = [
        WarnAction::None,
        WarnAction::Mute,
        WarnAction::Kick,
        WarnAction::Ban,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mute => "mute",
            Self::Kick => "kick",
            Self::Ban => "ban",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "Do nothing",
            Self::Mute => "Mute",
            Self::Kick => "Kick",
            Self::Ban => "Ban",
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LevelingConfigDto {
    #[serde(default)]
    pub enabled: bool,
    /// Channel for level-up announcements; `None` answers in the source channel.
    #[serde(default, with = "snowflake::option")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub level_up_channel: Option<u64>,
    #[serde(default)]
    pub level_up_message: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServerDataDto {
    pub prefix: String,
    pub locale: String,
    #[serde(default, with = "snowflake::option")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub notice_channel: Option<u64>,
    #[serde(default)]
    pub warn_limit: Option<u32>,
    #[serde(default)]
    pub warn_action: WarnAction,
    #[serde(default)]
    pub leveling: LevelingConfigDto,
}

/// Partial update of [`ServerDataDto`]; omitted fields stay unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServerDataPatchDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(
        default,
        with = "snowflake::patch",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub notice_channel: Option<Option<u64>>,
    #[serde(
        default,
        deserialize_with = "present_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<u32>))]
    pub warn_limit: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warn_action: Option<WarnAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leveling: Option<LevelingConfigDto>,
}

/// Keeps an explicit `null` as `Some(None)` so it clears the stored value.
fn present_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ServerDataPatchDto {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ServerDataDto {
    /// Builds the patch that turns `self` into `edited`, listing only changed fields.
    pub fn diff(&self, edited: &ServerDataDto) -> ServerDataPatchDto {
        fn changed<T: PartialEq + Clone>(old: &T, new: &T) -> Option<T> {
            (old != new).then(|| new.clone())
        }

        ServerDataPatchDto {
            prefix: changed(&self.prefix, &edited.prefix),
            locale: changed(&self.locale, &edited.locale),
            notice_channel: changed(&self.notice_channel, &edited.notice_channel),
            warn_limit: changed(&self.warn_limit, &edited.warn_limit),
            warn_action: changed(&self.warn_action, &edited.warn_action),
            leveling: changed(&self.leveling, &edited.leveling),
        }
    }

    /// Applies a patch locally, mirroring what the API stores.
    pub fn apply(&mut self, patch: ServerDataPatchDto) {
        if let Some(prefix) = patch.prefix {
            self.prefix = prefix;
        }
        if let Some(locale) = patch.locale {
            self.locale = locale;
        }
        if let Some(notice_channel) = patch.notice_channel {
            self.notice_channel = notice_channel;
        }
        if let Some(warn_limit) = patch.warn_limit {
            self.warn_limit = warn_limit;
        }
        if let Some(warn_action) = patch.warn_action {
            self.warn_action = warn_action;
        }
        if let Some(leveling) = patch.leveling {
            self.leveling = leveling;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_data() -> ServerDataDto {
        ServerDataDto {
            prefix: "a!".to_string(),
            locale: "ko".to_string(),
            notice_channel: Some(10),
            warn_limit: Some(5),
            warn_action: WarnAction::Kick,
            leveling: LevelingConfigDto::default(),
        }
    }

    #[test]
    fn diff_of_identical_data_is_empty() {
        let data = server_data();
        assert!(data.diff(&data.clone()).is_empty());
    }

    #[test]
    fn diff_lists_only_changed_fields() {
        let data = server_data();
        let mut edited = data.clone();
        edited.prefix = "!".to_string();
        edited.notice_channel = None;

        let patch = data.diff(&edited);
        assert_eq!(patch.prefix.as_deref(), Some("!"));
        assert_eq!(patch.notice_channel, Some(None));
        assert_eq!(patch.locale, None);
        assert_eq!(patch.warn_action, None);

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "prefix": "!", "notice_channel": null }));
    }

    #[test]
    fn applying_diff_reproduces_edit() {
        let mut data = server_data();
        let mut edited = data.clone();
        edited.warn_limit = None;
        edited.warn_action = WarnAction::Ban;
        edited.leveling.enabled = true;

        data.apply(data.diff(&edited));
        assert_eq!(data, edited);
    }

    #[test]
    fn explicit_null_clears_warn_limit() {
        let patch: ServerDataPatchDto =
            serde_json::from_value(serde_json::json!({ "warn_limit": null })).unwrap();
        assert_eq!(patch.warn_limit, Some(None));
        assert!(!patch.is_empty());
    }

    #[test]
    fn warn_action_parses_wire_names() {
        assert_eq!(WarnAction::from_str("ban"), Some(WarnAction::Ban));
        assert_eq!(WarnAction::from_str("explode"), None);
    }
}
