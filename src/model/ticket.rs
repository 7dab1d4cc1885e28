//! Support tickets and the ticket sets that open them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::snowflake;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketSetDto {
    pub uuid: String,
    pub name: String,
    /// Channel holding the "react to open a ticket" message.
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub channel: u64,
    pub emoji: String,
    /// Category new ticket channels are created under.
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub category_opened: u64,
    /// Category closed ticket channels move to; `None` deletes them instead.
    #[serde(default, with = "snowflake::option")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub category_closed: Option<u64>,
    pub message: String,
    #[serde(default, with = "snowflake::option")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub message_id: Option<u64>,
}

/// Body of a ticket set creation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketSetPostDto {
    pub name: String,
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub channel: u64,
    pub emoji: String,
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub category_opened: u64,
    #[serde(default, with = "snowflake::option")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub category_closed: Option<u64>,
    pub message: String,
}

/// Partial ticket set update; omitted fields stay unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketSetPatchDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(
        default,
        with = "snowflake::patch",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub category_closed: Option<Option<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TicketSetPatchDto {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl TicketSetDto {
    /// Patch for the editable fields that differ in `edited`.
    pub fn diff(&self, edited: &TicketSetPostDto) -> TicketSetPatchDto {
        TicketSetPatchDto {
            name: (self.name != edited.name).then(|| edited.name.clone()),
            emoji: (self.emoji != edited.emoji).then(|| edited.emoji.clone()),
            category_closed: (self.category_closed != edited.category_closed)
                .then_some(edited.category_closed),
            message: (self.message != edited.message).then(|| edited.message.clone()),
        }
    }

    /// Editable copy of the set, used to seed edit forms.
    pub fn to_post(&self) -> TicketSetPostDto {
        TicketSetPostDto {
            name: self.name.clone(),
            channel: self.channel,
            emoji: self.emoji.clone(),
            category_opened: self.category_opened,
            category_closed: self.category_closed,
            message: self.message.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Closed,
    Deleted,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Deleted => "Deleted",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Open => "badge-success",
            Self::Closed => "badge-neutral",
            Self::Deleted => "badge-error",
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketDto {
    pub uuid: String,
    pub ticketset: String,
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub opener: u64,
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub channel: u64,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_keeps_unchanged_fields_out() {
        let set = TicketSetDto {
            uuid: "u".to_string(),
            name: "Support".to_string(),
            channel: 1,
            emoji: "🎫".to_string(),
            category_opened: 2,
            category_closed: Some(3),
            message: "React to open".to_string(),
            message_id: Some(4),
        };
        let mut edited = set.to_post();
        edited.message = "React below".to_string();
        edited.category_closed = None;

        let patch = set.diff(&edited);
        assert_eq!(patch.name, None);
        assert_eq!(patch.emoji, None);
        assert_eq!(patch.category_closed, Some(None));
        assert_eq!(patch.message.as_deref(), Some("React below"));
        assert!(set.diff(&set.to_post()).is_empty());
    }
}
