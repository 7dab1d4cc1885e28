use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{
    dashboard::{
        Autotasking, Billboards, DashboardLayout, General, Leveling, MemberDetail, Members,
        Statistics, Tickets, Warns,
    },
    GuildSelect, Invite, Login, NotFound,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login?:redirect")]
    Login { redirect: String },

    #[route("/invite/:invite_id")]
    Invite { invite_id: String },

    #[layout(RequiresLoggedIn)]
    #[route("/")]
    GuildSelect {},

    #[nest("/dashboard/:guild_id")]
    #[layout(DashboardLayout)]
        #[route("/")]
        General { guild_id: u64 },

        #[route("/members")]
        Members { guild_id: u64 },

        #[route("/members/:member_id")]
        MemberDetail { guild_id: u64, member_id: u64 },

        #[route("/warns")]
        Warns { guild_id: u64 },

        #[route("/leveling")]
        Leveling { guild_id: u64 },

        #[route("/tickets")]
        Tickets { guild_id: u64 },

        #[route("/autotasking")]
        Autotasking { guild_id: u64 },

        #[route("/billboards")]
        Billboards { guild_id: u64 },

        #[route("/statistics")]
        Statistics { guild_id: u64 },
    #[end_layout]
    #[end_nest]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
