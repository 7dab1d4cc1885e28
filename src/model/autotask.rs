//! Reaction-driven automation rules.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::snowflake;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AutotaskAction {
    #[default]
    AddRole,
    RemoveRole,
}

impl AutotaskAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddRole => "Grant role",
            Self::RemoveRole => "Revoke role",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddRole => "add_role",
            Self::RemoveRole => "remove_role",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "add_role" => Some(Self::AddRole),
            "remove_role" => Some(Self::RemoveRole),
            _ => None,
        }
    }
}

/// Reacting with `emoji` on `message` in `channel` runs `action` with `role`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AutotaskDto {
    pub uuid: String,
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub channel: u64,
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub message: u64,
    pub emoji: String,
    pub action: AutotaskAction,
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub role: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AutotaskPostDto {
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub channel: u64,
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub message: u64,
    pub emoji: String,
    pub action: AutotaskAction,
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub role: u64,
}
