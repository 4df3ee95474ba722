//! Contact form endpoint.

use axum::extract::rejection::JsonRejection;
use axum::{Json, Router, routing::post};
use portfolio_content::application::command_handlers;
use portfolio_content::domain::commands::{ContactSubmission, SubmitContact};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::routes::MessageResponse;
use crate::state::AppState;

/// POST /api/contact
///
/// Any JSON object is accepted. Nothing is stored or sent.
#[instrument(skip(payload))]
async fn submit_contact(
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(submission) = payload?;
    let command = SubmitContact {
        correlation_id: Uuid::new_v4(),
        submission,
    };

    debug!(correlation_id = %command.correlation_id, "handling submit_contact command");

    let receipt = command_handlers::handle_submit_contact(&command);

    Ok(Json(MessageResponse {
        message: receipt.message.to_owned(),
    }))
}

/// Returns the router for the contact form.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_contact))
}
