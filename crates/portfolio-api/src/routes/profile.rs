//! Profile endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use portfolio_content::application::query_handlers;
use portfolio_content::domain::records::Profile;
use tracing::instrument;

use crate::state::AppState;

/// GET /api/profile
#[instrument(skip(state))]
async fn get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(query_handlers::get_profile(&state.catalog).clone())
}

/// Returns the router for the profile.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_profile))
}
