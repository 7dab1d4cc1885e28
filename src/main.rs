mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let session = startup::setup_session_layer(&config);
        let http_client = startup::setup_reqwest_client();
        let oauth_client = startup::setup_oauth_client(&config)?;

        tracing::info!("Starting server, relaying to {}", config.aztra_api_url);

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(
                http_client,
                oauth_client,
                config.aztra_api_url.clone(),
                config.app_url.clone(),
                config.discord_client_id.clone(),
                config.discord_redirect_url.clone(),
            ))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
