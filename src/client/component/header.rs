use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_brands_icons::FaDiscord,
        fa_solid_icons::{FaMoon, FaSun},
    },
    Icon,
};

use crate::client::{
    constant::SITE_NAME,
    model::{auth::SessionContext, preferences::Theme},
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::logout;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Header() -> Element {
    let session = use_context::<SessionContext>();
    let mut theme = use_context::<Signal<Theme>>();

    let state = session.read().clone();
    let fetch_completed = !state.is_initializing();
    let user = state.user().cloned();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::GuildSelect {},
                p {
                    class: "md:text-xl text-wrap font-semibold",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            button {
                class: "btn btn-ghost btn-circle",
                title: "Toggle theme",
                onclick: move |_| {
                    let next = theme().toggled();
                    theme.set(next);
                },
                if theme() == Theme::Dark {
                    Icon { width: 18, height: 18, icon: FaSun }
                } else {
                    Icon { width: 18, height: 18, icon: FaMoon }
                }
            }
            if let Some(user) = user {
                div {
                    class: "hidden sm:flex items-center gap-2",
                    img {
                        class: "w-8 h-8 rounded-full",
                        src: "{user.avatar_url}",
                        alt: "{user.name}",
                    }
                    span { class: "text-sm", "{user.name}" }
                }
                LogoutButton {}
            } else if fetch_completed {
                a {
                    href: "/api/auth/login",
                    div {
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon {
                            width: 22,
                            height: 22,
                            icon: FaDiscord
                        }
                        p {
                            "Login"
                        }
                    }
                }
            }
        }
    })
}

#[component]
fn LogoutButton() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut session = use_context::<SessionContext>();
    #[allow(unused_variables)]
    let nav = navigator();
    let mut is_logging_out = use_signal(|| false);

    rsx! {
        button {
            class: "btn btn-outline",
            disabled: is_logging_out(),
            onclick: move |_| {
                is_logging_out.set(true);
                #[cfg(feature = "web")]
                spawn(async move {
                    if let Err(err) = logout().await {
                        tracing::error!("Failed to log out: {}", err);
                    }
                    session.clear();
                    is_logging_out.set(false);
                    nav.push(Route::Login { redirect: String::new() });
                });
            },
            "Logout"
        }
    }
}
