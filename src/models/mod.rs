//! Domain Models
//!
//! Read-only snapshots of backend data used by the pages.

mod appointment;
mod tenant;

pub use appointment::{AppointmentRecord, InvalidStartTime, StartTime};
pub use tenant::{BrandColor, DoctorProfile, TenantSiteConfig, DEFAULT_BRAND_COLOR};
