//! Per-form validation.
//!
//! Each form gets an errors struct with one optional message per field so the
//! view can mark exactly the inputs that need attention.

use crate::model::{
    autotask::AutotaskPostDto, billboard::BILLBOARD_PLACEHOLDERS, server_data::ServerDataDto,
    ticket::TicketSetPostDto,
};

pub const PREFIX_MAX_LENGTH: usize = 5;
pub const WARN_LIMIT_MAX: u32 = 20;
pub const TICKET_SET_NAME_MAX_LENGTH: usize = 100;
/// Discord's message length limit.
pub const MESSAGE_MAX_LENGTH: usize = 2000;
/// Discord's channel name length limit.
pub const CHANNEL_NAME_MAX_LENGTH: usize = 100;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn required(value: &str, field: &str) -> Option<String> {
    value
        .trim()
        .is_empty()
        .then(|| format!("{} is required", field))
}

fn max_length(value: &str, max: usize, field: &str) -> Option<String> {
    (char_len(value) > max).then(|| format!("{} must be at most {} characters", field, max))
}

fn required_id(value: u64, field: &str) -> Option<String> {
    (value == 0).then(|| format!("Select a {}", field))
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct GeneralSettingsErrors {
    pub prefix: Option<String>,
    pub warn_limit: Option<String>,
}

impl GeneralSettingsErrors {
    pub fn is_valid(&self) -> bool {
        *self == Self::default()
    }
}

pub fn validate_general_settings(data: &ServerDataDto) -> GeneralSettingsErrors {
    let prefix = required(&data.prefix, "Prefix")
        .or_else(|| max_length(&data.prefix, PREFIX_MAX_LENGTH, "Prefix"))
        .or_else(|| {
            data.prefix
                .chars()
                .any(char::is_whitespace)
                .then(|| "Prefix cannot contain spaces".to_string())
        });

    let warn_limit = data.warn_limit.and_then(|limit| {
        (limit == 0 || limit > WARN_LIMIT_MAX)
            .then(|| format!("Warn limit must be between 1 and {}", WARN_LIMIT_MAX))
    });

    GeneralSettingsErrors { prefix, warn_limit }
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct LevelingErrors {
    pub level_up_message: Option<String>,
}

impl LevelingErrors {
    pub fn is_valid(&self) -> bool {
        *self == Self::default()
    }
}

pub fn validate_leveling(data: &ServerDataDto) -> LevelingErrors {
    let message = data.leveling.level_up_message.as_deref().unwrap_or_default();
    let level_up_message = if data.leveling.enabled {
        required(message, "Level-up message")
    } else {
        None
    }
    .or_else(|| max_length(message, MESSAGE_MAX_LENGTH, "Level-up message"));

    LevelingErrors { level_up_message }
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct TicketSetErrors {
    pub name: Option<String>,
    pub channel: Option<String>,
    pub emoji: Option<String>,
    pub category_opened: Option<String>,
    pub message: Option<String>,
}

impl TicketSetErrors {
    pub fn is_valid(&self) -> bool {
        *self == Self::default()
    }
}

pub fn validate_ticket_set(form: &TicketSetPostDto) -> TicketSetErrors {
    TicketSetErrors {
        name: required(&form.name, "Name")
            .or_else(|| max_length(&form.name, TICKET_SET_NAME_MAX_LENGTH, "Name")),
        channel: required_id(form.channel, "channel"),
        emoji: required(&form.emoji, "Emoji"),
        category_opened: required_id(form.category_opened, "category"),
        message: required(&form.message, "Message")
            .or_else(|| max_length(&form.message, MESSAGE_MAX_LENGTH, "Message")),
    }
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct BillboardErrors {
    pub channel: Option<String>,
    pub format: Option<String>,
}

impl BillboardErrors {
    pub fn is_valid(&self) -> bool {
        *self == Self::default()
    }
}

pub fn validate_billboard(channel: u64, format: &str) -> BillboardErrors {
    let format_error = required(format, "Format")
        .or_else(|| max_length(format, CHANNEL_NAME_MAX_LENGTH, "Format"))
        .or_else(|| {
            (!BILLBOARD_PLACEHOLDERS
                .iter()
                .any(|placeholder| format.contains(placeholder)))
            .then(|| {
                format!(
                    "Format must contain one of {}",
                    BILLBOARD_PLACEHOLDERS.join(", ")
                )
            })
        });

    BillboardErrors {
        channel: required_id(channel, "channel"),
        format: format_error,
    }
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct AutotaskErrors {
    pub channel: Option<String>,
    pub message: Option<String>,
    pub emoji: Option<String>,
    pub role: Option<String>,
}

impl AutotaskErrors {
    pub fn is_valid(&self) -> bool {
        *self == Self::default()
    }
}

pub fn validate_autotask(form: &AutotaskPostDto) -> AutotaskErrors {
    AutotaskErrors {
        channel: required_id(form.channel, "channel"),
        message: (form.message == 0).then(|| "Enter the message ID".to_string()),
        emoji: required(&form.emoji, "Emoji"),
        role: required_id(form.role, "role"),
    }
}

/// Parses a snowflake typed into a text input.
pub fn parse_snowflake(input: &str) -> Option<u64> {
    input.trim().parse::<u64>().ok().filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{autotask::AutotaskAction, server_data::LevelingConfigDto};

    fn server_data(prefix: &str) -> ServerDataDto {
        ServerDataDto {
            prefix: prefix.to_string(),
            locale: "ko".to_string(),
            notice_channel: None,
            warn_limit: Some(3),
            warn_action: Default::default(),
            leveling: LevelingConfigDto::default(),
        }
    }

    #[test]
    fn prefix_rules() {
        assert!(validate_general_settings(&server_data("a!")).is_valid());
        assert!(validate_general_settings(&server_data("")).prefix.is_some());
        assert!(validate_general_settings(&server_data("a b")).prefix.is_some());
        assert!(validate_general_settings(&server_data("toolong")).prefix.is_some());
    }

    #[test]
    fn warn_limit_range() {
        let mut data = server_data("a!");
        data.warn_limit = Some(0);
        assert!(validate_general_settings(&data).warn_limit.is_some());
        data.warn_limit = None;
        assert!(validate_general_settings(&data).is_valid());
    }

    #[test]
    fn level_up_message_required_only_when_enabled() {
        let mut data = server_data("a!");
        assert!(validate_leveling(&data).is_valid());
        data.leveling.enabled = true;
        assert!(!validate_leveling(&data).is_valid());
    }

    #[test]
    fn ticket_set_reports_each_field() {
        let errors = validate_ticket_set(&TicketSetPostDto::default());
        assert!(errors.name.is_some());
        assert!(errors.channel.is_some());
        assert!(errors.emoji.is_some());
        assert!(errors.category_opened.is_some());
        assert!(errors.message.is_some());

        let form = TicketSetPostDto {
            name: "Support".to_string(),
            channel: 1,
            emoji: "🎫".to_string(),
            category_opened: 2,
            category_closed: None,
            message: "React below".to_string(),
        };
        assert!(validate_ticket_set(&form).is_valid());
    }

    #[test]
    fn billboard_needs_a_placeholder() {
        assert!(validate_billboard(1, "Members: {members}").is_valid());
        assert!(validate_billboard(1, "Members").format.is_some());
        assert!(validate_billboard(0, "{online}").channel.is_some());
    }

    #[test]
    fn autotask_requires_all_targets() {
        let form = AutotaskPostDto {
            channel: 1,
            message: 0,
            emoji: "✅".to_string(),
            action: AutotaskAction::AddRole,
            role: 3,
        };
        let errors = validate_autotask(&form);
        assert!(errors.message.is_some());
        assert!(errors.channel.is_none());
    }

    #[test]
    fn snowflake_input_parsing() {
        assert_eq!(parse_snowflake(" 123 "), Some(123));
        assert_eq!(parse_snowflake("0"), None);
        assert_eq!(parse_snowflake("abc"), None);
    }
}
