//! Booking-intent capture for the public site widget.
//!
//! The widget only records which doctor and date a visitor is interested
//! in. Nothing is sent to the backend.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::models::TenantSiteConfig;

/// Query string submitted by the widget form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingQuery {
    pub doctor: Option<String>,
    pub date: Option<String>,
}

impl BookingQuery {
    /// True when the visitor has submitted the form at least once
    pub fn is_submitted(&self) -> bool {
        self.doctor.is_some() || self.date.is_some()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("No doctor selected")]
    MissingDoctor,

    #[error("Doctor is not on this clinic's roster: {0}")]
    UnknownDoctor(String),

    #[error("No preferred date given")]
    MissingDate,

    #[error("Preferred date is not a valid YYYY-MM-DD date: {0}")]
    InvalidDate(String),

    #[error("Preferred date is in the past: {0}")]
    DateInPast(NaiveDate),
}

impl BookingError {
    /// Message shown to the visitor
    pub fn user_message(&self) -> &'static str {
        match self {
            BookingError::MissingDoctor => "Selecciona un profesional.",
            BookingError::UnknownDoctor(_) => "El profesional seleccionado no atiende en esta clínica.",
            BookingError::MissingDate => "Selecciona una fecha preferida.",
            BookingError::InvalidDate(_) => "La fecha ingresada no es válida.",
            BookingError::DateInPast(_) => "La fecha preferida no puede ser anterior a hoy.",
        }
    }
}

/// A validated doctor and preferred date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingIntent {
    pub doctor: String,
    pub date: NaiveDate,
}

impl BookingIntent {
    /// Validate a submitted widget form against the clinic roster.
    ///
    /// `today` is the clinic's current date; the preferred date may be
    /// today but not earlier.
    pub fn capture(
        query: &BookingQuery,
        site: &TenantSiteConfig,
        today: NaiveDate,
    ) -> Result<Self, BookingError> {
        let doctor = query
            .doctor
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(BookingError::MissingDoctor)?;
        if !site.has_doctor(doctor) {
            return Err(BookingError::UnknownDoctor(doctor.to_string()));
        }

        let raw_date = query
            .date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(BookingError::MissingDate)?;
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate(raw_date.to_string()))?;
        if date < today {
            return Err(BookingError::DateInPast(date));
        }

        Ok(Self {
            doctor: doctor.to_string(),
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BrandColor, DoctorProfile};

    fn site() -> TenantSiteConfig {
        TenantSiteConfig {
            clinic_name: "Clínica Sonrisa".to_string(),
            welcome_text: None,
            primary_color: BrandColor::default(),
            logo_url: None,
            address: None,
            phone: Some("+56 9 1234 5678".to_string()),
            doctors: vec![
                DoctorProfile::new("Dra. Ana Pérez"),
                DoctorProfile::new("Dr. Luis Soto"),
            ],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
    }

    fn query(doctor: Option<&str>, date: Option<&str>) -> BookingQuery {
        BookingQuery {
            doctor: doctor.map(String::from),
            date: date.map(String::from),
        }
    }

    #[test]
    fn test_capture_valid() {
        let intent = BookingIntent::capture(
            &query(Some("Dr. Luis Soto"), Some("2025-12-18")),
            &site(),
            today(),
        )
        .unwrap();
        assert_eq!(intent.doctor, "Dr. Luis Soto");
        assert_eq!(intent.date, NaiveDate::from_ymd_opt(2025, 12, 18).unwrap());
    }

    #[test]
    fn test_capture_today_is_allowed() {
        let intent =
            BookingIntent::capture(&query(Some("Dra. Ana Pérez"), Some("2025-12-15")), &site(), today());
        assert!(intent.is_ok());
    }

    #[test]
    fn test_capture_rejects_unknown_doctor() {
        let err = BookingIntent::capture(&query(Some("Dr. House"), Some("2025-12-18")), &site(), today())
            .unwrap_err();
        assert_eq!(err, BookingError::UnknownDoctor("Dr. House".to_string()));
    }

    #[test]
    fn test_capture_accepts_padded_roster_name() {
        let mut site = site();
        site.doctors.push(DoctorProfile::new("Dr. Tomás Rojas "));

        let intent = BookingIntent::capture(
            &query(Some("Dr. Tomás Rojas "), Some("2025-12-18")),
            &site,
            today(),
        )
        .unwrap();
        assert_eq!(intent.doctor, "Dr. Tomás Rojas");
    }

    #[test]
    fn test_capture_rejects_bad_dates() {
        let past = BookingIntent::capture(&query(Some("Dra. Ana Pérez"), Some("2025-12-01")), &site(), today());
        assert!(matches!(past, Err(BookingError::DateInPast(_))));

        let garbage = BookingIntent::capture(&query(Some("Dra. Ana Pérez"), Some("18/12/2025")), &site(), today());
        assert!(matches!(garbage, Err(BookingError::InvalidDate(_))));

        let missing = BookingIntent::capture(&query(Some("Dra. Ana Pérez"), Some("")), &site(), today());
        assert_eq!(missing, Err(BookingError::MissingDate));
    }

    #[test]
    fn test_submitted_flag() {
        assert!(!BookingQuery::default().is_submitted());
        assert!(query(None, Some("2025-12-18")).is_submitted());
        assert_eq!(
            BookingIntent::capture(&query(None, Some("2025-12-18")), &site(), today()),
            Err(BookingError::MissingDoctor)
        );
    }
}
