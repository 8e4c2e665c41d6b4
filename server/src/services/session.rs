//! Session resolution: who, if anyone, is signed in for a request.
//!
//! DESIGN
//! ======
//! Authentication happens outside this service. Either an authenticating
//! reverse proxy forwards the user's email in a trusted header, or the
//! deployment pins a fixed session. Nothing here issues or validates tokens.
//!
//! Roles travel the same way: a second trusted header (or a fixed list)
//! carrying comma-separated role names. They gate which pages a user sees.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use axum::http::{HeaderMap, HeaderName};
use client::state::pages::Session;

use crate::config::SessionSource;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid session header name: {0:?}")]
    InvalidHeader(String),
}

#[derive(Debug, Clone)]
pub enum SessionResolver {
    /// Email (and roles, when configured) taken from headers set by the proxy
    /// in front of the server.
    Header { email: HeaderName, roles: Option<HeaderName> },
    /// Same session for every request.
    Fixed(Option<Session>),
}

impl SessionResolver {
    /// # Errors
    ///
    /// Returns an error if a configured header name is not a valid HTTP header name.
    pub fn from_source(source: &SessionSource) -> Result<Self, SessionError> {
        match source {
            SessionSource::Header { email, roles } => Ok(Self::Header {
                email: header_name(email)?,
                roles: roles.as_deref().map(header_name).transpose()?,
            }),
            SessionSource::Fixed { email, roles } => {
                let session = email.clone().map(|email| {
                    let session = Session::new(email);
                    match roles {
                        Some(raw) => session.with_roles(parse_roles(raw)),
                        None => session,
                    }
                });
                Ok(Self::Fixed(session))
            }
        }
    }

    /// Session for a request with `headers`, or `None` when signed out.
    ///
    /// With a roles header configured, a missing roles header means no roles.
    pub fn resolve(&self, headers: &HeaderMap) -> Option<Session> {
        match self {
            Self::Header { email, roles } => {
                let session = header_str(headers, email).filter(|value| !value.is_empty()).map(Session::new)?;
                Some(match roles {
                    Some(name) => session.with_roles(header_str(headers, name).map(parse_roles).unwrap_or_default()),
                    None => session,
                })
            }
            Self::Fixed(session) => session.clone(),
        }
    }
}

/// Split a comma-separated role list, dropping blanks.
pub fn parse_roles(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|role| !role.is_empty()).map(str::to_owned).collect()
}

fn header_name(name: &str) -> Result<HeaderName, SessionError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|_| SessionError::InvalidHeader(name.to_owned()))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok()).map(str::trim)
}
