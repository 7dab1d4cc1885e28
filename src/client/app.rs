use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    model::{auth::SessionContext, preferences::Theme},
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::{api::auth::get_user, model::auth::AuthState};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const DAISYUI_THEMES_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5/themes.css";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut session = use_context_provider(SessionContext::new);
    #[allow(unused_mut, unused_variables)]
    let mut theme = use_context_provider(|| Signal::new(Theme::default()));

    // Fetch user on first load
    #[cfg(feature = "web")]
    use_future(move || async move {
        let result = get_user().await;
        if let Err(err) = &result {
            tracing::error!("Failed to fetch user: {}", err);
        }
        session.set(AuthState::from(result));
    });

    // Restore the stored theme, then keep the document in sync with it
    #[cfg(feature = "web")]
    use_future(move || async move {
        let stored = document::eval(&Theme::load_script())
            .join::<Option<String>>()
            .await
            .ok()
            .flatten()
            .and_then(|value| Theme::from_str(&value));
        if let Some(stored) = stored {
            theme.set(stored);
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        document::eval(&theme().apply_script());
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Manage the Aztra Discord bot for your server"
        }
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Link { rel: "stylesheet", href: DAISYUI_THEMES_CSS }
        document::Script { src: TAILWIND_JS }
        Router::<Route> {}
    }
}
