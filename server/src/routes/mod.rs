//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the HTML index, the session-gated page documents, static
//! assets, and the redirects to the external login/logout boundary under a
//! single Axum router.


pub mod index;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{MethodRouter, get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

const ROBOTS_TXT: &str = "User-agent: *\nDisallow: /\n";

/// Build the application router.
///
/// `/p/{id}/...` is only mounted when the state has a pages directory, and
/// `/login` / `/logout` only when their redirect targets are.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(index::index))
        .route("/robots.txt", get(robots_txt))
        .route("/healthz", get(healthz))
        .nest_service("/assets", ServeDir::new(&config.assets_dir));

    if let Some(url) = &config.login_url {
        router = router.route(client::state::pages::LOGIN_PATH, redirect_to(url.clone()));
    }
    if let Some(url) = &config.logout_url {
        router = router.route(client::state::pages::LOGOUT_PATH, redirect_to(url.clone()));
    }

    if state.pages_dir.is_some() {
        router = router.route(pages::PAGE_DOCUMENT_ROUTE, get(pages::page_document));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

fn redirect_to(target: String) -> MethodRouter<AppState> {
    get(move || {
        let target = target.clone();
        async move { Redirect::temporary(&target) }
    })
}

async fn robots_txt() -> &'static str {
    ROBOTS_TXT
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
