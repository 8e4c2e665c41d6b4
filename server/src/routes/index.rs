//! Index route: renders the page-list view.

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use client::app::render_index_page;
use client::state::pages::{Page, PageListState, Session, ViewMode};
use serde::Deserialize;

use crate::state::AppState;

/// Query string accepted by `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub view: Option<String>,
}

impl IndexQuery {
    /// Requested layout; unknown values fall back to the default.
    pub fn view_mode(&self) -> ViewMode {
        let Some(raw) = self.view.as_deref() else {
            return ViewMode::default();
        };
        raw.parse::<ViewMode>().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "ignoring view query");
            ViewMode::default()
        })
    }
}

/// `GET /`: page list for the signed-in user, or a sign-in prompt.
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IndexQuery>,
) -> Html<String> {
    let session = state.sessions.resolve(&headers);
    let pages = match &session {
        Some(session) => visible_pages(list_pages(&state).await, session),
        None => Vec::new(),
    };

    let view = PageListState::new(&*state.title)
        .with_session(session)
        .with_pages(pages)
        .with_view_mode(query.view_mode());

    Html(render_index_page(view))
}

/// Catalog failures degrade to an empty list.
async fn list_pages(state: &AppState) -> Vec<Page> {
    match state.catalog.list_pages().await {
        Ok(pages) => pages,
        Err(e) => {
            tracing::error!(error = %e, "failed to list pages");
            Vec::new()
        }
    }
}

/// Pages `session` may open, in catalog order.
pub fn visible_pages(mut pages: Vec<Page>, session: &Session) -> Vec<Page> {
    pages.retain(|page| session.can_view(&page.id));
    pages
}
