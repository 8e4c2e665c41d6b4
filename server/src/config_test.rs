use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.title, DEFAULT_SITE_TITLE);
    assert_eq!(cfg.catalog, CatalogSource::Demo);
    assert_eq!(cfg.pages_dir, None);
    assert!(cfg.assets_dir.ends_with("assets"));
    assert_eq!(cfg.session, SessionSource::Fixed { email: None, roles: None });
    assert_eq!(cfg.login_url, None);
    assert_eq!(cfg.logout_url, None);
}

#[test]
fn pages_dir_selects_directory_catalog() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PAGES_DIR", "/srv/pages")])).unwrap();
    assert_eq!(cfg.catalog, CatalogSource::Directory(PathBuf::from("/srv/pages")));
    assert_eq!(cfg.pages_dir, Some(PathBuf::from("/srv/pages")));
}

#[test]
fn catalog_file_wins_over_pages_dir_for_listing() {
    let cfg =
        ServerConfig::from_lookup(lookup(&[("PAGES_DIR", "/srv/pages"), ("PAGES_CATALOG", "/etc/pages.yaml")])).unwrap();
    assert_eq!(cfg.catalog, CatalogSource::File(PathBuf::from("/etc/pages.yaml")));
    assert_eq!(cfg.pages_dir, Some(PathBuf::from("/srv/pages")));
}

#[test]
fn session_header_wins_over_fixed_email() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("SESSION_HEADER", "X-Forwarded-Email"),
        ("SESSION_EMAIL", "user@example.com"),
    ]))
    .unwrap();
    assert_eq!(cfg.session, SessionSource::Header { email: "x-forwarded-email".to_owned(), roles: None });
}

#[test]
fn fixed_session_email() {
    let cfg = ServerConfig::from_lookup(lookup(&[("SESSION_EMAIL", "user@example.com")])).unwrap();
    assert_eq!(cfg.session, SessionSource::Fixed { email: Some("user@example.com".to_owned()), roles: None });
}

#[test]
fn session_roles_header_is_lowercased() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("SESSION_HEADER", "X-Forwarded-Email"),
        ("SESSION_ROLES_HEADER", "X-Forwarded-Groups"),
    ]))
    .unwrap();
    assert_eq!(
        cfg.session,
        SessionSource::Header {
            email: "x-forwarded-email".to_owned(),
            roles: Some("x-forwarded-groups".to_owned())
        }
    );
}

#[test]
fn fixed_session_roles() {
    let cfg =
        ServerConfig::from_lookup(lookup(&[("SESSION_EMAIL", "user@example.com"), ("SESSION_ROLES", "page1, staff")]))
            .unwrap();
    assert_eq!(
        cfg.session,
        SessionSource::Fixed { email: Some("user@example.com".to_owned()), roles: Some("page1, staff".to_owned()) }
    );
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("SITE_TITLE", "   "), ("PAGES_DIR", ""), ("PORT", " ")])).unwrap();
    assert_eq!(cfg.title, DEFAULT_SITE_TITLE);
    assert_eq!(cfg.catalog, CatalogSource::Demo);
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("SITE_TITLE", "Team Docs"),
        ("ASSETS_DIR", "/srv/assets"),
        ("LOGIN_URL", "https://sso.example.com/login"),
        ("LOGOUT_URL", "https://sso.example.com/logout"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.title, "Team Docs");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
    assert_eq!(cfg.login_url.as_deref(), Some("https://sso.example.com/login"));
    assert_eq!(cfg.logout_url.as_deref(), Some("https://sso.example.com/logout"));
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".to_owned() });

    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "70000".to_owned() });
}
