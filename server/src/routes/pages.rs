//! Page documents under `/p/{id}/...`, visible to signed-in users only.
//!
//! Only files inside a page directory are served: `/p/{id}` alone and loose
//! files at the root of the pages directory are never reachable. A user whose
//! roles do not cover `id` gets the same `404` as a signed-out visitor.

use axum::extract::{Path, Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use client::state::pages::is_valid_page_id;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Route pattern for page documents.
pub const PAGE_DOCUMENT_ROUTE: &str = "/p/{id}/{*path}";

/// `GET /p/{id}/{*path}`: a file from page `id`'s directory.
pub async fn page_document(
    State(state): State<AppState>,
    Path((id, _)): Path<(String, String)>,
    mut request: Request,
) -> Response {
    let Some(root) = state.pages_dir.as_deref() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let allowed = is_valid_page_id(&id)
        && state.sessions.resolve(request.headers()).is_some_and(|session| session.can_view(&id));
    if !allowed {
        return StatusCode::NOT_FOUND.into_response();
    }

    let Some(uri) = strip_route_prefix(request.uri()) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    *request.uri_mut() = uri;

    match ServeDir::new(root).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// `/p/{id}/{path}?q` as `/{id}/{path}?q`, still percent-encoded.
fn strip_route_prefix(uri: &Uri) -> Option<Uri> {
    let path_and_query = uri.path_and_query()?.as_str();
    path_and_query.strip_prefix("/p")?.parse().ok()
}
