//! Browser cookie persistence of the session token.

use axum::http::{header, HeaderMap};
use cookie::{time::Duration, Cookie, SameSite};

use super::store::SessionStore;

/// Fixed persistent key of the token
pub const TOKEN_COOKIE: &str = "token";

/// Cookie lifetime (400 days, the browser maximum)
pub const COOKIE_MAX_AGE_SECS: u64 = 34_560_000;

/// Attributes applied to the session cookie
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CookiePolicy {
    /// Add the `Secure` attribute
    pub secure: bool,
}

/// Value of cookie `name` from the request's `Cookie` headers
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse_encoded)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// [`SessionStore`] backed by the request cookie.
///
/// Writes are recorded as a pending `Set-Cookie` directive for the
/// response.
#[derive(Debug, Clone, Default)]
pub struct CookieSessionStore {
    current: Option<String>,
    pending: Option<String>,
    policy: CookiePolicy,
}

impl CookieSessionStore {
    pub fn from_headers(headers: &HeaderMap, policy: CookiePolicy) -> Self {
        Self {
            current: read_cookie(headers, TOKEN_COOKIE),
            pending: None,
            policy,
        }
    }

    /// `Set-Cookie` value to send, if the token changed
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn take_pending(&mut self) -> Option<String> {
        self.pending.take()
    }

    fn directive(&self, value: &str, max_age: Duration) -> String {
        Cookie::build((TOKEN_COOKIE, value.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.policy.secure)
            .max_age(max_age)
            .build()
            .encoded()
            .to_string()
    }
}

impl SessionStore for CookieSessionStore {
    fn get(&self) -> Option<String> {
        self.current.clone()
    }

    fn set(&mut self, token: &str) {
        self.pending = Some(self.directive(token, Duration::seconds(COOKIE_MAX_AGE_SECS as i64)));
        self.current = Some(token.to_string());
    }

    fn clear(&mut self) {
        self.pending = Some(self.directive("", Duration::ZERO));
        self.current = None;
    }
}
