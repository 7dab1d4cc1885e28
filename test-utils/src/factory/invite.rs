use serde_json::{json, Value};

/// Creates an unused invite to `guild_id` expiring at `expires_at` (RFC 3339), if any.
pub fn create_invite(id: &str, guild_id: u64, expires_at: Option<&str>) -> Value {
    json!({
        "id": id,
        "guild": {
            "id": guild_id.to_string(),
            "name": format!("Guild {}", guild_id),
            "icon": null,
        },
        "expires_at": expires_at,
        "used": false,
    })
}
