//! Public tenant site
//!
//! Unauthenticated per-clinic page: domain handling, theming, the page
//! lifecycle and the booking-intent widget. Markup lives in
//! [`crate::web::views::site`].

mod booking;
mod domain;
mod page;
mod theme;

pub use booking::{BookingError, BookingIntent, BookingQuery};
pub use domain::{DomainError, TenantDomain};
pub use page::SitePage;
pub use theme::{hero_image, CLINIC_HERO, DEFAULT_HERO, SMILE_HERO};

/// Subtitle on every doctor card
pub const DOCTOR_SUBTITLE: &str = "Odontología General";
