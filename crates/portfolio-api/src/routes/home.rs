//! Root greeting endpoint.

use axum::{Json, Router, routing::get};
use portfolio_content::application::query_handlers;
use tracing::instrument;

use crate::routes::MessageResponse;
use crate::state::AppState;

/// GET /
#[instrument]
async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: query_handlers::welcome_message().to_owned(),
    })
}

/// Returns the root router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
