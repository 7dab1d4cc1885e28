use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        hooks::use_cached,
        model::error::ApiError,
    },
    model::{discord::guild_icon_url, invite::InviteViewDto},
};

#[cfg(feature = "web")]
use crate::client::{
    api::invite::{get_invite, join_invite},
    hooks::use_fetch,
};

/// Invitation to a server, accepted with the `guilds.join` login.
#[component]
pub fn Invite(invite_id: String) -> Element {
    #[allow(unused_mut)]
    let mut invite = use_cached::<InviteViewDto>();
    let mut is_joining = use_signal(|| false);
    let mut join_error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let invite_id = invite_id.clone();
        use_fetch(invite, move || {
            let invite_id = invite_id.clone();
            async move { get_invite(&invite_id).await }
        });
    }

    let login_href = format!("/api/auth/login/invite/{}", invite_id);
    let cache = invite.cache.read();

    let Some(view) = cache.data().cloned() else {
        return match cache.error() {
            Some(error) if error.is_not_found() => rsx! {
                ErrorPage { status: 404, message: "This invite does not exist" }
            },
            Some(error) => rsx! {
                ErrorPage { status: error.status, message: error.message.clone() }
            },
            None => rsx! { LoadingPage {} },
        };
    };

    let guild = &view.invite.guild;
    let icon = guild_icon_url(guild.id, guild.icon.as_deref(), 128);
    let expired = view.invite.is_expired(Utc::now());
    let expires = view
        .invite
        .expires_at
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string());

    rsx! {
        Title { "Invite | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            div {
                class: "card bg-base-200 w-full max-w-md",
                div {
                    class: "card-body items-center text-center gap-4",
                    if let Some(icon) = icon {
                        img { class: "w-24 h-24 rounded-full", src: "{icon}", alt: "{guild.name}" }
                    }
                    p { class: "opacity-70", "You have been invited to" }
                    h1 { class: "text-2xl font-semibold", "{guild.name}" }
                    if let Some(expires) = expires {
                        p { class: "text-sm opacity-70", "Expires {expires}" }
                    }
                    if let Some(error) = join_error() {
                        div { class: "alert alert-error", span { "Failed to join: {error}" } }
                    }
                    if view.joined {
                        div { class: "alert alert-success", span { "You joined this server" } }
                    } else if view.invite.used || expired {
                        div { class: "alert alert-warning", span { "This invite is no longer valid" } }
                    } else if view.can_join {
                        button {
                            class: "btn btn-primary",
                            disabled: is_joining(),
                            onclick: {
                                #[allow(unused_variables)]
                                let invite_id = invite_id.clone();
                                move |_| {
                                    is_joining.set(true);
                                    join_error.set(None);
                                    #[cfg(feature = "web")]
                                    {
                                        let invite_id = invite_id.clone();
                                        spawn(async move {
                                            match join_invite(&invite_id).await {
                                                Ok(()) => invite.refresh(),
                                                Err(err) => join_error.set(Some(err)),
                                            }
                                            is_joining.set(false);
                                        });
                                    }
                                }
                            },
                            if is_joining() {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                            }
                            "Join server"
                        }
                    } else {
                        a {
                            href: "{login_href}",
                            div {
                                class: "btn btn-outline flex gap-2 items-center",
                                Icon { width: 22, height: 22, icon: FaDiscord }
                                p { "Log in to accept" }
                            }
                        }
                    }
                }
            }
        }
    }
}
