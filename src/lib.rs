//! # OdontoBuild Web
//!
//! Server-rendered front end of the OdontoBuild dental clinic SaaS: staff
//! login, a weekly appointment agenda and per-tenant public sites, all
//! backed by an external clinic REST API.
//!
//! ## Modules
//!
//! - [`session`]: Bearer token persistence in the `token` cookie
//! - [`backend`]: REST client for the clinic backend
//! - [`schedule`]: Clinic clock and weekly grid projection
//! - [`site`]: Public tenant site logic and booking-intent capture
//! - [`web`]: Axum router, handlers and Leptos views
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use odontobuild::{backend::HttpClinicApi, config::Config, web};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     config.validate()?;
//!
//!     let api = Arc::new(HttpClinicApi::new(&config.backend_config())?);
//!     let state = web::AppState::new(api, &config)?;
//!     web::serve(state, &config.server.addr()).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod logging;
pub mod models;
pub mod schedule;
pub mod session;
pub mod site;
pub mod web;

pub use backend::{AccessToken, AuthError, BackendConfig, ClinicApi, FetchError, HttpClinicApi, SiteError};

pub use config::{Config, ConfigError};

pub use models::{AppointmentRecord, BrandColor, DoctorProfile, StartTime, TenantSiteConfig};

pub use schedule::{find_appointment, ClinicClock, ProjectedWeek, SlotConflict, WeekGrid};

pub use session::{CookieSessionStore, MemorySessionStore, SessionContext, SessionStore};

pub use site::{hero_image, BookingIntent, SitePage, TenantDomain};

pub use web::{build_router, serve, AppState, WebError};
