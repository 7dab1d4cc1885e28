//! Raw guild activity counters (`/servers/{guild_id}/statistics`).
//!
//! Points are sparse: the API omits periods without activity and the client
//! fills the gaps when bucketing them for charts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{billboard::GuildCountsDto, snowflake};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StatPointDto {
    pub dt: DateTime<Utc>,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MemberMessageCountDto {
    #[serde(with = "snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub member: u64,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StatisticsDto {
    /// Member total snapshots.
    #[serde(default)]
    pub members: Vec<StatPointDto>,
    /// Messages sent per recorded period.
    #[serde(default)]
    pub messages: Vec<StatPointDto>,
    /// Messages per member over the last 30 days.
    #[serde(default)]
    pub member_messages: Vec<MemberMessageCountDto>,
    #[serde(default)]
    pub current: GuildCountsDto,
}
