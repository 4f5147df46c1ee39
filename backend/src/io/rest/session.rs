//! Session cookie handling for the REST boundary.
//!
//! The session token rides in a `sessionId` cookie. Requests that arrive
//! without one get a fresh token from the identity provider, and the
//! response carries the matching `Set-Cookie` with a 7-day lifetime.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::Response;

use crate::domain::{EnsuredSession, SESSION_TTL_SECONDS};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "sessionId";

/// Session token extracted from the request cookies, if the client sent one
#[derive(Debug, Clone, Default)]
pub struct SessionCookie(pub Option<String>);

impl SessionCookie {
    pub fn token(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionCookie(session_token(&parts.headers)))
    }
}

/// Pull the session token out of the request's `Cookie` headers
fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (name, token) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE && !token.is_empty()).then(|| token.to_string())
        })
}

/// Attach the `Set-Cookie` header when the session token was minted for
/// this request. Errors carry it too, mirroring how the cookie is issued
/// before the operation runs.
pub fn with_session_cookie(mut response: Response, session: &EnsuredSession) -> Response {
    if session.newly_issued {
        response
            .headers_mut()
            .insert(header::SET_COOKIE, session_cookie_header(&session.token));
    }
    response
}

fn session_cookie_header(token: &str) -> HeaderValue {
    format!("{SESSION_COOKIE}={token}; Path=/; Max-Age={SESSION_TTL_SECONDS}")
        .parse()
        .unwrap()
}
