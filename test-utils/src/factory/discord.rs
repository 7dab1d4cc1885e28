//! Discord-shaped records as relayed by the Aztra API.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Manage Server permission bit.
pub const MANAGE_GUILD: u64 = 1 << 5;
/// Administrator permission bit.
pub const ADMINISTRATOR: u64 = 1 << 3;

/// Factory for Discord user objects.
pub struct UserFactory {
    id: u64,
    username: String,
    discriminator: String,
    avatar: Option<String>,
    bot: bool,
}

impl UserFactory {
    /// Defaults: unique id, `user{id}`, migrated account (`"0"` discriminator), no avatar.
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            username: format!("user{}", id),
            discriminator: "0".to_string(),
            avatar: None,
            bot: false,
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn discriminator(mut self, discriminator: impl Into<String>) -> Self {
        self.discriminator = discriminator.into();
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn bot(mut self, bot: bool) -> Self {
        self.bot = bot;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id.to_string(),
            "username": self.username,
            "discriminator": self.discriminator,
            "global_name": null,
            "avatar": self.avatar,
            "bot": self.bot,
        })
    }
}

impl Default for UserFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a user with the given id and username.
pub fn create_user(id: u64, username: &str) -> Value {
    UserFactory::new().id(id).username(username).build()
}

/// Factory for guild member objects.
pub struct MemberFactory {
    user: UserFactory,
    nick: Option<String>,
    roles: Vec<u64>,
    joined_at: String,
}

impl MemberFactory {
    pub fn new() -> Self {
        Self {
            user: UserFactory::new(),
            nick: None,
            roles: Vec::new(),
            joined_at: "2021-01-01T00:00:00Z".to_string(),
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.user = self.user.id(id);
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.user = self.user.username(username);
        self
    }

    pub fn bot(mut self, bot: bool) -> Self {
        self.user = self.user.bot(bot);
        self
    }

    pub fn nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    pub fn roles(mut self, roles: Vec<u64>) -> Self {
        self.roles = roles;
        self
    }

    pub fn build(self) -> Value {
        let roles: Vec<String> = self.roles.iter().map(u64::to_string).collect();
        json!({
            "user": self.user.build(),
            "nick": self.nick,
            "joined_at": self.joined_at,
            "roles": roles,
        })
    }
}

impl Default for MemberFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a member with the given id and username.
pub fn create_member(id: u64, username: &str) -> Value {
    MemberFactory::new().id(id).username(username).build()
}

/// Creates a role.
pub fn create_role(id: u64, name: &str, position: i64) -> Value {
    json!({
        "id": id.to_string(),
        "name": name,
        "position": position,
        "color": 0x3498db,
        "permissions": "0",
        "managed": false,
    })
}

/// Creates a channel of the given Discord channel type.
pub fn create_channel(id: u64, name: &str, kind: u8, parent_id: Option<u64>) -> Value {
    json!({
        "id": id.to_string(),
        "name": name,
        "type": kind,
        "position": 0,
        "parent_id": parent_id.map(|id| id.to_string()),
    })
}

/// Factory for entries of `/discord/users/@me/guilds`.
pub struct PartialGuildFactory {
    id: u64,
    name: String,
    owner: bool,
    permissions: u64,
}

impl PartialGuildFactory {
    /// Defaults: unique id, not owner, no permissions.
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            name: format!("Guild {}", id),
            owner: false,
            permissions: 0,
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn owner(mut self, owner: bool) -> Self {
        self.owner = owner;
        self
    }

    pub fn permissions(mut self, permissions: u64) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id.to_string(),
            "name": self.name,
            "icon": null,
            "owner": self.owner,
            "permissions": self.permissions.to_string(),
        })
    }
}

impl Default for PartialGuildFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a guild list entry with the given permission bits.
pub fn create_partial_guild(id: u64, permissions: u64) -> Value {
    PartialGuildFactory::new()
        .id(id)
        .permissions(permissions)
        .build()
}

/// Creates a full guild record.
pub fn create_guild(id: u64, name: &str, owner_id: u64) -> Value {
    json!({
        "id": id.to_string(),
        "name": name,
        "icon": null,
        "owner_id": owner_id.to_string(),
        "approximate_member_count": 10,
    })
}
