//! Static tables rendered by the header, footer and login pages.

pub const SITE_NAME: &str = "Aztra Dashboard";

/// Interval of background revalidation on live views.
pub const REVALIDATE_INTERVAL_MS: u32 = 5_000;

/// Sample level used by the level-up message preview.
pub const LEVEL_UP_PREVIEW_LEVEL: u32 = 10;

pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const EXTERNAL_LINKS: [ExternalLink; 3] = [
    ExternalLink {
        label: "Support server",
        href: "https://discord.gg/NqbBgEf",
    },
    ExternalLink {
        label: "GitHub",
        href: "https://github.com/Aztra-Team",
    },
    ExternalLink {
        label: "Korean Discord bot list",
        href: "https://koreanbots.dev/bots/751339721782722570",
    },
];

pub struct DocEntry {
    pub title: &'static str,
    pub summary: &'static str,
    pub href: &'static str,
}

pub const DOCS_INDEX: [DocEntry; 6] = [
    DocEntry {
        title: "Getting started",
        summary: "Invite Aztra and open the dashboard for your server.",
        href: "https://docs.aztra.xyz/start",
    },
    DocEntry {
        title: "Warnings",
        summary: "Warn members and act automatically at the warn limit.",
        href: "https://docs.aztra.xyz/warns",
    },
    DocEntry {
        title: "Leveling",
        summary: "Experience points, rankings and level-up messages.",
        href: "https://docs.aztra.xyz/leveling",
    },
    DocEntry {
        title: "Tickets",
        summary: "Private support channels opened with a reaction.",
        href: "https://docs.aztra.xyz/tickets",
    },
    DocEntry {
        title: "Auto tasking",
        summary: "Grant or revoke roles when members react to a message.",
        href: "https://docs.aztra.xyz/autotasking",
    },
    DocEntry {
        title: "Billboards",
        summary: "Channel names that show live server counters.",
        href: "https://docs.aztra.xyz/billboards",
    },
];

/// OAuth2 scopes requested at login, with the reason shown to the user.
pub const OAUTH_SCOPES: [(&str, &str); 3] = [
    ("identify", "Read your username and avatar"),
    ("guilds", "List the servers you can manage"),
    (
        "guilds.join",
        "Join servers on your behalf, only when you accept an invite",
    ),
];
