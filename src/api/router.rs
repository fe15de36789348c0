use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/health", get(handlers::health::health_check))
        // Scoreboard
        .route("/api/scores", get(handlers::scores::live))
        .route("/api/stats/:team", get(handlers::stats::team))
        // Reference data
        .route("/api/teams", get(handlers::teams::list))
        .route("/api/teams/:team/players", get(handlers::players::by_team))
        .route("/api/games/:id", get(handlers::games::detail))
        .route("/api/players/:id", get(handlers::players::detail))
        // Feeds
        .route("/api/alerts", get(handlers::alerts::list))
        .route("/api/system/stats", get(handlers::system::latest));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api.route("/metrics", get(handlers::metrics::render))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
