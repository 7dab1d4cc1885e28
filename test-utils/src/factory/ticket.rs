use serde_json::{json, Value};

use crate::factory::helpers::{next_id, next_uuid};

/// Factory for ticket sets.
pub struct TicketSetFactory {
    uuid: String,
    name: String,
    channel: u64,
    category_opened: u64,
    category_closed: Option<u64>,
    message_id: Option<u64>,
}

impl TicketSetFactory {
    pub fn new() -> Self {
        Self {
            uuid: next_uuid(),
            name: "Support".to_string(),
            channel: next_id(),
            category_opened: next_id(),
            category_closed: None,
            message_id: None,
        }
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category_closed(mut self, category: u64) -> Self {
        self.category_closed = Some(category);
        self
    }

    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = Some(message_id);
        self
    }

    pub fn build(self) -> Value {
        json!({
            "uuid": self.uuid,
            "name": self.name,
            "channel": self.channel.to_string(),
            "emoji": "🎫",
            "category_opened": self.category_opened.to_string(),
            "category_closed": self.category_closed.map(|id| id.to_string()),
            "message": "React with 🎫 to open a ticket",
            "message_id": self.message_id.map(|id| id.to_string()),
        })
    }
}

impl Default for TicketSetFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a ticket of `ticketset` with status `open`, `closed` or `deleted`.
pub fn create_ticket(ticketset: &str, opener: u64, status: &str) -> Value {
    json!({
        "uuid": next_uuid(),
        "ticketset": ticketset,
        "opener": opener.to_string(),
        "channel": next_id().to_string(),
        "status": status,
        "created_at": "2024-03-01T12:00:00Z",
    })
}
