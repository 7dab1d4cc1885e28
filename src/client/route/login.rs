use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{
    component::{LoadingPage, Page},
    constant::{DOCS_INDEX, OAUTH_SCOPES, SITE_NAME},
    model::auth::{AuthState, SessionContext},
    router::Route,
};

/// BFF endpoint starting the Discord login, returning to `redirect` afterwards.
fn login_href(redirect: &str) -> String {
    if redirect.is_empty() {
        return "/api/auth/login".to_string();
    }
    let encoded: String = url::form_urlencoded::byte_serialize(redirect.as_bytes()).collect();
    format!("/api/auth/login?redirect={}", encoded)
}

#[component]
pub fn Login(redirect: String) -> Element {
    let session = use_context::<SessionContext>();
    let nav = navigator();

    // Handle redirect for authenticated users
    use_effect(move || {
        if session.read().is_authenticated() {
            nav.push(Route::GuildSelect {});
        }
    });

    let state = session.read().clone();
    let href = login_href(&redirect);

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col gap-8 items-center justify-center w-full",
                    p {
                        class: "text-3xl font-semibold",
                        {SITE_NAME}
                    }
                    a {
                        href: "{href}",
                        div {
                            class: "btn btn-outline flex gap-2 items-center",
                            Icon {
                                width: 24,
                                height: 24,
                                icon: FaDiscord
                            }
                            p {
                                "Login with Discord"
                            }
                        }
                    }
                    div {
                        class: "card bg-base-200 w-full max-w-md",
                        div {
                            class: "card-body",
                            h2 { class: "card-title text-base", "Requested permissions" }
                            ul {
                                class: "text-sm flex flex-col gap-1",
                                for (scope, reason) in OAUTH_SCOPES {
                                    li {
                                        span { class: "badge badge-outline mr-2", "{scope}" }
                                        "{reason}"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-4 w-full max-w-4xl",
                        for doc in DOCS_INDEX.iter() {
                            a {
                                class: "card bg-base-200 hover:bg-base-300",
                                href: doc.href,
                                target: "_blank",
                                rel: "noreferrer",
                                div {
                                    class: "card-body p-4",
                                    h3 { class: "font-semibold", "{doc.title}" }
                                    p { class: "text-sm opacity-70", "{doc.summary}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_path_is_encoded() {
        assert_eq!(login_href(""), "/api/auth/login");
        assert_eq!(
            login_href("/dashboard/1/warns"),
            "/api/auth/login?redirect=%2Fdashboard%2F1%2Fwarns"
        );
    }
}
