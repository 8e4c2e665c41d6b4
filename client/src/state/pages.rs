//! Page-list view state: pages, session, and the grid/list toggle.
//!
//! DESIGN
//! ======
//! The rendering rule lives here as data (`PageListContent`) so the view
//! component only maps variants to markup. Everything in this module is plain
//! data; the server builds a `PageListState` per request.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Path of the external sign-in boundary.
pub const LOGIN_PATH: &str = "/login";
/// Path of the external sign-out boundary.
pub const LOGOUT_PATH: &str = "/logout";

/// Link target for the rendered document of page `id`.
pub fn page_href(id: &str) -> String {
    format!("/p/{id}/index.html")
}

/// Whether `id` can serve as a page slug: one non-empty path segment that
/// needs no escaping in `page_href`.
pub fn is_valid_page_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.chars().any(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_control())
}

/// A document entry shown in the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Page {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), image: None }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn href(&self) -> String {
        page_href(&self.id)
    }
}

/// Role that may view every page.
pub const ADMIN_ROLE: &str = "admin";

/// Minimal signed-in indicator.
///
/// `roles` is `None` when no role source is configured; every page is then
/// visible. Otherwise a page is visible when its id is one of the roles, or
/// the user holds [`ADMIN_ROLE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub roles: Option<Vec<String>>,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into(), roles: None }
    }

    #[must_use]
    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = Some(roles);
        self
    }

    pub fn can_view(&self, page_id: &str) -> bool {
        match &self.roles {
            None => true,
            Some(roles) => roles.iter().any(|role| role == ADMIN_ROLE || role == page_id),
        }
    }
}

/// Layout used to display the page collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Multi-column cards.
    #[default]
    Grid,
    /// Single-column rows with a hover preview.
    List,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Query-string representation (`?view=...`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a `view` query value names no known mode.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown view mode: {0:?}")]
pub struct UnknownViewMode(pub String);

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            _ => Err(UnknownViewMode(raw.to_owned())),
        }
    }
}

/// What the page-list view shows, derived from its state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageListContent {
    /// Signed out: a single call-to-action towards the login boundary.
    SignInPrompt,
    /// Signed in, but nothing to list.
    NoPages { session: Session },
    /// Signed in with at least one page.
    Pages { session: Session, view_mode: ViewMode, pages: Vec<Page> },
}

/// Complete state of the page-list view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageListState {
    pub title: String,
    pub session: Option<Session>,
    pub pages: Vec<Page>,
    pub view_mode: ViewMode,
}

impl PageListState {
    /// Signed-out state with no pages and the default layout.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), session: None, pages: Vec::new(), view_mode: ViewMode::default() }
    }

    #[must_use]
    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    #[must_use]
    pub fn with_pages(mut self, pages: Vec<Page>) -> Self {
        self.pages = pages;
        self
    }

    #[must_use]
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Flip between grid and list. Nothing else changes.
    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    /// Link that reloads the view in the other layout.
    pub fn toggle_href(&self) -> String {
        format!("/?view={}", self.view_mode.toggled())
    }

    /// Apply the rendering rule. Pages are dropped when signed out.
    pub fn into_content(self) -> PageListContent {
        match self.session {
            None => PageListContent::SignInPrompt,
            Some(session) if self.pages.is_empty() => PageListContent::NoPages { session },
            Some(session) => PageListContent::Pages { session, view_mode: self.view_mode, pages: self.pages },
        }
    }
}
