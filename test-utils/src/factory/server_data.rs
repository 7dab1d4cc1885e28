use serde_json::{json, Value};

/// Creates guild settings with the given prefix.
pub fn create_server_data(prefix: &str) -> Value {
    json!({
        "prefix": prefix,
        "locale": "ko",
        "notice_channel": null,
        "warn_limit": 5,
        "warn_action": "kick",
        "leveling": {
            "enabled": false,
            "level_up_channel": null,
            "level_up_message": null,
        },
    })
}
