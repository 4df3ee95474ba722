//! Portfolio API — HTTP surface of the portfolio content service.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::home::router())
        .merge(routes::health::router())
        .nest("/api/profile", routes::profile::router())
        .nest("/api/experience", routes::experience::router())
        .nest("/api/blogs", routes::blogs::router())
        .nest("/api/ramblings", routes::ramblings::router())
        .nest("/api/contact", routes::contact::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
