//! Ramblings endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use portfolio_content::application::query_handlers;
use portfolio_content::domain::records::Rambling;
use tracing::instrument;

use crate::state::AppState;

/// GET /api/ramblings
#[instrument(skip(state))]
async fn list_ramblings(State(state): State<AppState>) -> Json<Vec<Rambling>> {
    Json(query_handlers::list_ramblings(&state.catalog).to_vec())
}

/// Returns the router for ramblings.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_ramblings))
}
