//! Work experience endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use portfolio_content::application::query_handlers;
use portfolio_content::domain::records::ExperienceEntry;
use tracing::instrument;

use crate::state::AppState;

/// GET /api/experience
#[instrument(skip(state))]
async fn list_experience(State(state): State<AppState>) -> Json<Vec<ExperienceEntry>> {
    Json(query_handlers::list_experience(&state.catalog).to_vec())
}

/// Returns the router for work experience.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_experience))
}
