//! Channels whose names display live guild statistics.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::snowflake;

/// Placeholders a billboard format may contain.
pub const BILLBOARD_PLACEHOLDERS: [&str; 5] =
    ["{members}", "{users}", "{bots}", "{online}", "{boosts}"];

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BillboardDto {
    pub uuid: String,
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub channel: u64,
    pub format: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BillboardPostDto {
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub channel: u64,
    pub format: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BillboardPatchDto {
    pub format: String,
}

/// Live counters a billboard can display.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GuildCountsDto {
    pub members: u64,
    pub users: u64,
    pub bots: u64,
    pub online: u64,
    pub boosts: u64,
}
