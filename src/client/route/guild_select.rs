use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        hooks::use_cached,
        router::Route,
        util::{list::ListQuery, search::contains_normalized},
    },
    model::discord::ManageableGuildDto,
};

#[cfg(feature = "web")]
use crate::client::{api::guild::get_guilds, hooks::use_fetch};

/// Servers the user can manage, each opening its dashboard or inviting the bot.
#[component]
pub fn GuildSelect() -> Element {
    let guilds = use_cached::<Vec<ManageableGuildDto>>();
    let mut search = use_signal(String::new);

    #[cfg(feature = "web")]
    use_fetch(guilds, get_guilds);

    let cache = guilds.cache.read();

    rsx! {
        Title { "Servers | {SITE_NAME}" }
        if let Some(error) = cache.error() {
            ErrorPage { status: error.status, message: error.message.clone() }
        } else if let Some(all) = cache.data() {
            Page {
                class: "flex flex-col gap-4 max-w-5xl mx-auto",
                div {
                    class: "flex flex-col sm:flex-row justify-between gap-2",
                    h1 { class: "text-2xl font-semibold", "Select a server" }
                    input {
                        r#type: "text",
                        class: "input input-bordered",
                        placeholder: "Search servers",
                        value: "{search()}",
                        oninput: move |evt| search.set(evt.value()),
                    }
                }
                GuildGrid { guilds: all.clone(), search: search() }
            }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn GuildGrid(guilds: Vec<ManageableGuildDto>, search: String) -> Element {
    let matched = ListQuery::new(guilds.len().max(1))
        .filter(|g: &ManageableGuildDto| contains_normalized(&g.guild.name, &search))
        .sort_by_name(|g| Some(g.guild.name.clone()))
        .apply(&guilds);

    if guilds.is_empty() {
        return rsx! {
            p { class: "opacity-70", "You do not manage any server. Ask for the Manage Server permission first." }
        };
    }

    rsx! {
        div {
            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
            for entry in matched {
                div {
                    key: "{entry.guild.id}",
                    class: "card bg-base-200",
                    div {
                        class: "card-body flex-row items-center gap-4",
                        if let Some(icon) = entry.guild.icon_url(64) {
                            img { class: "w-12 h-12 rounded-full", src: "{icon}", alt: "{entry.guild.name}" }
                        } else {
                            div {
                                class: "w-12 h-12 rounded-full bg-base-300 flex items-center justify-center font-semibold",
                                "{entry.guild.acronym()}"
                            }
                        }
                        div {
                            class: "flex-1 min-w-0",
                            p { class: "font-semibold truncate", "{entry.guild.name}" }
                            div {
                                class: "flex gap-2 mt-2",
                                Link {
                                    to: Route::General { guild_id: entry.guild.id },
                                    class: "btn btn-sm btn-primary",
                                    "Dashboard"
                                }
                                a {
                                    class: "btn btn-sm btn-outline",
                                    href: "{entry.bot_invite_url}",
                                    target: "_blank",
                                    rel: "noreferrer",
                                    "Invite bot"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
