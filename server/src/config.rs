//! Server configuration parsed from environment variables.
//!
//! Every setting has a default except the optional sources; see
//! `ServerConfig::from_env` for the full list.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_TITLE: &str = "Pages";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },
}

/// Where the index route gets its page collection from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fixed list loaded from a YAML file.
    File(PathBuf),
    /// One page per sub-directory of the pages directory.
    Directory(PathBuf),
    /// Built-in sample pages.
    Demo,
}

/// How the signed-in user is determined for a request.
///
/// `roles` is the role source; when it is `None`, every page is visible to
/// any signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSource {
    /// Email (and optionally roles) read from headers set by an
    /// authenticating proxy.
    Header { email: String, roles: Option<String> },
    /// Same session for every request; `email: None` means always signed out.
    /// `roles` is a comma-separated list.
    Fixed { email: Option<String>, roles: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub title: String,
    pub catalog: CatalogSource,
    pub pages_dir: Option<PathBuf>,
    pub assets_dir: PathBuf,
    pub session: SessionSource,
    pub login_url: Option<String>,
    pub logout_url: Option<String>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_TITLE`: default "Pages"
    /// - `PAGES_CATALOG`: YAML catalog file, wins over `PAGES_DIR` for listing
    /// - `PAGES_DIR`: directory catalog root; also enables `/p/...`
    /// - `ASSETS_DIR`: default `assets/` next to this crate's manifest
    /// - `SESSION_HEADER`: trusted header carrying the user's email
    /// - `SESSION_ROLES_HEADER`: trusted header carrying comma-separated roles
    ///   (e.g. `X-Forwarded-Groups`); enables per-page visibility
    /// - `SESSION_EMAIL`: fixed signed-in email when no header is configured
    /// - `SESSION_ROLES`: comma-separated roles for the fixed session
    /// - `LOGIN_URL`, `LOGOUT_URL`: redirect targets for `/login` and `/logout`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        let title = var("SITE_TITLE").unwrap_or_else(|| DEFAULT_SITE_TITLE.to_owned());
        let pages_dir = var("PAGES_DIR").map(PathBuf::from);

        let catalog = match (var("PAGES_CATALOG"), &pages_dir) {
            (Some(file), _) => CatalogSource::File(PathBuf::from(file)),
            (None, Some(dir)) => CatalogSource::Directory(dir.clone()),
            (None, None) => CatalogSource::Demo,
        };

        let assets_dir = var("ASSETS_DIR").map_or_else(default_assets_dir, PathBuf::from);

        let session = match var("SESSION_HEADER") {
            Some(header) => SessionSource::Header {
                email: header.to_ascii_lowercase(),
                roles: var("SESSION_ROLES_HEADER").map(|name| name.to_ascii_lowercase()),
            },
            None => SessionSource::Fixed { email: var("SESSION_EMAIL"), roles: var("SESSION_ROLES") },
        };

        Ok(Self {
            port,
            title,
            catalog,
            pages_dir,
            assets_dir,
            session,
            login_url: var("LOGIN_URL"),
            logout_url: var("LOGOUT_URL"),
        })
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}
