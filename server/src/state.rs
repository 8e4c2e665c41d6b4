//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! built once at startup and never mutated; every field is cheap to clone.

use std::path::PathBuf;
use std::sync::Arc;

use crate::services::catalog::PageSource;
use crate::services::session::SessionResolver;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the catalog is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Navbar brand and document title.
    pub title: Arc<str>,
    pub catalog: Arc<dyn PageSource>,
    pub sessions: SessionResolver,
    /// Root served under `/p/{id}/...`; `None` leaves the route unmounted.
    pub pages_dir: Option<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(title: &str, catalog: Arc<dyn PageSource>, sessions: SessionResolver) -> Self {
        Self { title: Arc::from(title), catalog, sessions, pages_dir: None }
    }

    #[must_use]
    pub fn with_pages_dir(mut self, pages_dir: Option<PathBuf>) -> Self {
        self.pages_dir = pages_dir;
        self
    }
}
