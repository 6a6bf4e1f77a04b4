//! Explicit session object handed to every authenticated call site.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderValue},
    response::{IntoResponseParts, ResponseParts},
};
use std::convert::Infallible;

use super::cookie::{CookiePolicy, CookieSessionStore};
use super::store::SessionStore;

/// Current session over some [`SessionStore`]
#[derive(Debug, Clone)]
pub struct SessionContext<S = CookieSessionStore> {
    store: S,
    token: Option<String>,
}

impl<S: SessionStore> SessionContext<S> {
    /// Load the persisted token, if any
    pub fn init(store: S) -> Self {
        let token = store.get();
        Self { store, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Persist a freshly issued token, replacing any earlier one
    pub fn establish(&mut self, token: &str) {
        self.store.set(token);
        self.token = Some(token.to_string());
    }

    /// Forget the token. Safe to call without a session.
    pub fn teardown(&mut self) {
        self.store.clear();
        self.token = None;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[async_trait]
impl<T> FromRequestParts<T> for SessionContext<CookieSessionStore>
where
    CookiePolicy: FromRef<T>,
    T: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &T) -> Result<Self, Self::Rejection> {
        let policy = CookiePolicy::from_ref(state);
        Ok(Self::init(CookieSessionStore::from_headers(&parts.headers, policy)))
    }
}

impl IntoResponseParts for SessionContext<CookieSessionStore> {
    type Error = Infallible;

    fn into_response_parts(mut self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if let Some(cookie) = self.store.take_pending() {
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    res.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(e) => tracing::error!(error = %e, "Session cookie is not a valid header value"),
            }
        }
        Ok(res)
    }
}
