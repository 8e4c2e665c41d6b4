mod config;
mod routes;
mod services;
mod state;

use std::process::ExitCode;

use config::{CatalogSource, ServerConfig};
use services::catalog;
use services::session::SessionResolver;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    if config.catalog == CatalogSource::Demo {
        tracing::warn!("neither PAGES_CATALOG nor PAGES_DIR set; serving demo pages");
    }
    let catalog = match catalog::open(&config.catalog).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "failed to open page catalog");
            return ExitCode::FAILURE;
        }
    };

    let sessions = match SessionResolver::from_source(&config.session) {
        Ok(sessions) => sessions,
        Err(e) => {
            tracing::error!(error = %e, "invalid session configuration");
            return ExitCode::FAILURE;
        }
    };

    let state = state::AppState::new(&config.title, catalog, sessions).with_pages_dir(config.pages_dir.clone());
    let app = routes::app(state, &config);

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "pageshelf listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
