//! Appointment records as returned by the clinic backend.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Naive formats accepted for `start_time`, tried in order.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Start of an appointment.
///
/// The backend may or may not include an offset, so both shapes are kept
/// as received. Conversion to clinic-local time happens in
/// [`crate::schedule::ClinicClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartTime {
    /// Timestamp carrying an explicit UTC offset
    Zoned(DateTime<FixedOffset>),
    /// Timestamp without offset, taken as clinic-local
    Local(NaiveDateTime),
}

impl FromStr for StartTime {
    type Err = InvalidStartTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(StartTime::Zoned(dt));
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(StartTime::Local)
            .ok_or_else(|| InvalidStartTime(s.to_string()))
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartTime::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
            StartTime::Local(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

impl Serialize for StartTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `start_time` value that is not a valid instant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid appointment start time: {0:?}")]
pub struct InvalidStartTime(pub String);

/// A single appointment, read-only snapshot for one page load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentRecord {
    pub id: Option<String>,
    pub start_time: StartTime,
    pub patient_name: String,
}

impl AppointmentRecord {
    pub fn new(start_time: StartTime, patient_name: impl Into<String>) -> Self {
        Self {
            id: None,
            start_time,
            patient_name: patient_name.into(),
        }
    }

    /// Build a record from a raw `start_time` string
    pub fn parse(start_time: &str, patient_name: impl Into<String>) -> Result<Self, InvalidStartTime> {
        Ok(Self::new(start_time.parse()?, patient_name))
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_naive_minutes() {
        let start: StartTime = "2025-12-16T09:00".parse().unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 12, 16)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(start, StartTime::Local(expected));
    }

    #[test]
    fn test_parse_naive_with_fraction() {
        let start: StartTime = "2025-12-16T09:30:00.250".parse().unwrap();
        match start {
            StartTime::Local(dt) => assert_eq!(dt.minute(), 30),
            other => panic!("expected local time, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rfc3339_keeps_offset() {
        let start: StartTime = "2025-12-16T12:00:00Z".parse().unwrap();
        match start {
            StartTime::Zoned(dt) => {
                assert_eq!(dt.offset().local_minus_utc(), 0);
                assert_eq!(dt.hour(), 12);
            }
            other => panic!("expected zoned time, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid() {
        let err = "martes por la mañana".parse::<StartTime>().unwrap_err();
        assert!(err.to_string().contains("martes"));
        assert!("2025-13-40T09:00".parse::<StartTime>().is_err());
    }

    #[test]
    fn test_record_builder() {
        let record = AppointmentRecord::parse("2025-12-19T11:00:00", "Bruno")
            .unwrap()
            .with_id("a1");
        assert_eq!(record.id.as_deref(), Some("a1"));
        assert_eq!(record.patient_name, "Bruno");
    }
}
