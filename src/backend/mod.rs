//! Clinic Backend
//!
//! REST client for the external clinic backend, behind the [`ClinicApi`]
//! trait so pages can run against a stub.

mod client;
mod dto;
mod error;

pub use client::{AccessToken, BackendConfig, ClinicApi, HttpClinicApi};
pub use error::{AuthError, FetchError, SiteError};
