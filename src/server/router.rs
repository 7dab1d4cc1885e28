use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        autotask::{self, AUTOTASK_TAG},
        billboard::{self, BILLBOARD_TAG},
        guild::{self, GUILD_TAG},
        invite::{self, INVITE_TAG},
        level::{self, LEVEL_TAG},
        settings::{self, SETTINGS_TAG},
        statistics::{self, STATISTICS_TAG},
        ticket::{self, TICKET_TAG},
        warn::{self, WARN_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aztra Dashboard API",
        description = "Backend of the Aztra dashboard. Relays requests to the Aztra API with the session's token."
    ),
    tags(
        (name = AUTH_TAG, description = "Discord login and session"),
        (name = GUILD_TAG, description = "Guilds, members, roles and channels"),
        (name = SETTINGS_TAG, description = "General and leveling settings"),
        (name = WARN_TAG, description = "Member warns"),
        (name = TICKET_TAG, description = "Ticket sets and tickets"),
        (name = AUTOTASK_TAG, description = "Reaction role rules"),
        (name = BILLBOARD_TAG, description = "Statistic channel names"),
        (name = LEVEL_TAG, description = "Member exp"),
        (name = STATISTICS_TAG, description = "Member and message statistics"),
        (name = INVITE_TAG, description = "Dashboard invites")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::login_invite))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(guild::get_guilds))
        .routes(routes!(guild::get_guild))
        .routes(routes!(guild::get_members))
        .routes(routes!(guild::get_roles))
        .routes(routes!(guild::get_channels))
        .routes(routes!(settings::get_settings, settings::update_settings))
        .routes(routes!(warn::get_warns))
        .routes(routes!(warn::delete_warn))
        .routes(routes!(ticket::get_ticket_sets, ticket::create_ticket_set))
        .routes(routes!(
            ticket::get_ticket_set,
            ticket::update_ticket_set,
            ticket::delete_ticket_set
        ))
        .routes(routes!(ticket::resend_ticket_set))
        .routes(routes!(ticket::get_tickets))
        .routes(routes!(autotask::get_autotasks, autotask::create_autotask))
        .routes(routes!(autotask::delete_autotask))
        .routes(routes!(billboard::get_billboards, billboard::create_billboard))
        .routes(routes!(
            billboard::update_billboard,
            billboard::delete_billboard
        ))
        .routes(routes!(level::get_exps))
        .routes(routes!(level::update_exp))
        .routes(routes!(statistics::get_statistics))
        .routes(routes!(invite::get_invite))
        .routes(routes!(invite::join_invite))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
