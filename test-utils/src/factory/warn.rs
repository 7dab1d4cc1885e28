use serde_json::{json, Value};

use crate::factory::helpers::{next_id, next_uuid};

/// Factory for warn records.
pub struct WarnFactory {
    uuid: String,
    member: u64,
    by: u64,
    reason: String,
    count: u32,
    dt: String,
}

impl WarnFactory {
    /// Defaults: unique member and moderator, count 1.
    pub fn new() -> Self {
        Self {
            uuid: next_uuid(),
            member: next_id(),
            by: next_id(),
            reason: "Spam".to_string(),
            count: 1,
            dt: "2024-03-01T12:00:00Z".to_string(),
        }
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }

    pub fn member(mut self, member: u64) -> Self {
        self.member = member;
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn dt(mut self, dt: impl Into<String>) -> Self {
        self.dt = dt.into();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "uuid": self.uuid,
            "member": self.member.to_string(),
            "by": self.by.to_string(),
            "reason": self.reason,
            "count": self.count,
            "dt": self.dt,
        })
    }
}

impl Default for WarnFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a warn for `member` with `count`.
pub fn create_warn(member: u64, count: u32) -> Value {
    WarnFactory::new().member(member).count(count).build()
}
