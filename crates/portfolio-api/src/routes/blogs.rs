//! Blog post endpoints.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use portfolio_content::application::query_handlers;
use portfolio_content::domain::records::BlogPost;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/blogs
#[instrument(skip(state))]
async fn list_blog_posts(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(query_handlers::list_blog_posts(&state.catalog).to_vec())
}

/// GET /api/blogs/{id}
///
/// Ids that are not plain decimal digits get the same 404 as unknown routes.
#[instrument(skip(state, raw_id), fields(blog_id = tracing::field::Empty))]
async fn get_blog_post(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<BlogPost>, ApiError> {
    let Path(raw_id) = raw_id?;
    let id = parse_blog_id(&raw_id).ok_or(ApiError::InvalidId(raw_id))?;
    tracing::Span::current().record("blog_id", id);

    let post = query_handlers::get_blog_post_by_id(&state.catalog, id)?;
    Ok(Json(post.clone()))
}

/// Parses an id made only of ASCII digits. Signs, whitespace and values
/// beyond `u32` are rejected.
fn parse_blog_id(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Returns the router for blog posts.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_blog_posts))
        .route("/{id}", get(get_blog_post))
}
