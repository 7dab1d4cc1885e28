use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthState, SessionContext},
    router::Route,
};

/// Renders its child routes only for a logged-in user.
///
/// Anyone else is sent to the login page, which remembers the current path
/// so the user lands back here after authenticating.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let session = use_context::<SessionContext>();
    let nav = navigator();
    let route = use_route::<Route>();

    let state = session.read().clone();
    let logged_out = matches!(state, AuthState::NotLoggedIn);

    use_effect(use_reactive!(|(logged_out, route)| {
        if logged_out {
            nav.replace(Route::Login {
                redirect: route.to_string(),
            });
        }
    }));

    match state {
        AuthState::Initializing => rsx! { LoadingPage {} },
        AuthState::Authenticated(_) => rsx! { Outlet::<Route> {} },
        AuthState::Error(error) => rsx! {
            ErrorPage { status: error.status, message: error.message }
        },
        // Render nothing while redirecting via the effect
        AuthState::NotLoggedIn => rsx! {},
    }
}
