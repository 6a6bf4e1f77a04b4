//! Application State
//!
//! Shared, immutable state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use axum::extract::FromRef;
use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use crate::backend::ClinicApi;
use crate::config::{Config, ConfigError};
use crate::schedule::ClinicClock;
use crate::session::CookiePolicy;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Clinic backend client
    pub api: Arc<dyn ClinicApi>,
    /// Clinic wall clock
    pub clock: ClinicClock,
    /// Hour rows shown on the agenda
    pub agenda_hours: Range<u32>,
    /// Session cookie attributes
    pub cookie_policy: CookiePolicy,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from a validated configuration
    pub fn new(api: Arc<dyn ClinicApi>, config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            api,
            clock: config.clock()?,
            agenda_hours: config.agenda_hours(),
            cookie_policy: config.cookie_policy(),
            start_time: Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl FromRef<Arc<AppState>> for CookiePolicy {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.cookie_policy
    }
}
