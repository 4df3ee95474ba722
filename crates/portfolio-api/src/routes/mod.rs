//! Route modules, one per collection.

use serde::Serialize;

pub mod blogs;
pub mod contact;
pub mod experience;
pub mod health;
pub mod home;
pub mod profile;
pub mod ramblings;

/// `{ "message": ... }` body shared by the greeting and contact routes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// The message text.
    pub message: String,
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use portfolio_content::domain::catalog::ContentCatalog;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::state::AppState;

    pub(crate) fn state_with(catalog: ContentCatalog) -> AppState {
        AppState::new(Arc::new(catalog))
    }

    pub(crate) async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();
        (status, json)
    }

    pub(crate) async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        send(app, request).await
    }
}
