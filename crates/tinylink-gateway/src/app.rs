use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_url_handler, health_handler, redirect_handler, shorten_lookup_handler, stats_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        // static segments take priority over `{shortcode}`; neither "shorten"
        // nor "healthz" is six characters long, so no valid code is shadowed;
        // a GET on "/shorten" is a lookup of an unknown code
        Router::new()
            .route("/healthz", get(health_handler))
            .route(
                "/shorten",
                post(create_url_handler).get(shorten_lookup_handler),
            )
            .route("/{shortcode}", get(redirect_handler))
            .route("/{shortcode}/stats", get(stats_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
