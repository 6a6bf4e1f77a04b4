//! Session
//!
//! The single bearer token of a browser profile. Persisted in the `token`
//! cookie; the server keeps no session state of its own.

mod context;
mod cookie;
mod store;

pub use context::SessionContext;
pub use cookie::{read_cookie, CookiePolicy, CookieSessionStore, COOKIE_MAX_AGE_SECS, TOKEN_COOKIE};
pub use store::{MemorySessionStore, SessionStore};
