use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Modal, Page},
        hooks::use_cached,
        router::Route,
    },
    model::discord::GuildDto,
};

#[cfg(feature = "web")]
use crate::client::{api::guild::get_guild, hooks::use_fetch};

fn nav_items(guild_id: u64) -> [(&'static str, Route); 8] {
    [
        ("General", Route::General { guild_id }),
        ("Members", Route::Members { guild_id }),
        ("Warns", Route::Warns { guild_id }),
        ("Leveling", Route::Leveling { guild_id }),
        ("Tickets", Route::Tickets { guild_id }),
        ("Auto tasking", Route::Autotasking { guild_id }),
        ("Billboards", Route::Billboards { guild_id }),
        ("Statistics", Route::Statistics { guild_id }),
    ]
}

/// Sidebar and guild header around every dashboard page.
///
/// The guild is fetched once here. A `404` means Aztra is not in the guild or
/// cannot see it, which is explained in a modal instead of an error page.
#[component]
pub fn DashboardLayout(guild_id: u64) -> Element {
    let guild = use_cached::<GuildDto>();
    let show_missing = use_signal(|| true);

    #[cfg(feature = "web")]
    use_fetch(guild, move || get_guild(guild_id));

    let current = use_route::<Route>();
    let cache = guild.cache.read();

    if let Some(error) = cache.error() {
        if error.is_not_found() {
            return rsx! {
                Page {
                    Modal {
                        show: show_missing,
                        title: "Aztra cannot see this server",
                        prevent_close: true,
                        p {
                            class: "py-2",
                            "The bot may not be in this server, or it is missing the permissions it needs. Invite it again from the server list."
                        }
                        div {
                            class: "modal-action",
                            Link { to: Route::GuildSelect {}, class: "btn btn-primary", "Back to servers" }
                        }
                    }
                }
            };
        }
        return rsx! {
            ErrorPage { status: error.status, message: error.message.clone() }
        };
    }

    let Some(data) = cache.data() else {
        return rsx! { LoadingPage {} };
    };

    rsx! {
        Page {
            class: "flex flex-col md:flex-row gap-6",
            aside {
                class: "md:w-56 shrink-0",
                div {
                    class: "flex items-center gap-3 mb-4",
                    if let Some(icon) = data.icon_url(64) {
                        img { class: "w-10 h-10 rounded-full", src: "{icon}", alt: "{data.name}" }
                    } else {
                        div {
                            class: "w-10 h-10 rounded-full bg-base-300 flex items-center justify-center text-sm font-semibold",
                            "{data.acronym()}"
                        }
                    }
                    p { class: "font-semibold truncate", "{data.name}" }
                }
                ul {
                    class: "menu bg-base-200 rounded-box w-full",
                    for (label, route) in nav_items(guild_id) {
                        li {
                            Link {
                                class: if route == current { "menu-active" } else { "" },
                                to: route.clone(),
                                "{label}"
                            }
                        }
                    }
                }
            }
            main {
                class: "flex-1 min-w-0",
                Outlet::<Route> {}
            }
        }
    }
}
