//! Clinic-local time.
//!
//! Every appointment timestamp is normalized to the clinic's fixed UTC
//! offset before it is placed on the grid. Timestamps that carry an offset
//! are converted; naive timestamps are taken as already clinic-local.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

use crate::models::StartTime;

/// Fixed UTC offset defining the clinic's wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicClock {
    offset: FixedOffset,
}

impl ClinicClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Parse an offset such as `-03:00`, `+0530` or `Z`
    pub fn parse_offset(value: &str) -> Option<FixedOffset> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
            return FixedOffset::east_opt(0);
        }

        let (sign, rest) = match value.as_bytes().first()? {
            b'+' => (1, &value[1..]),
            b'-' => (-1, &value[1..]),
            _ => return None,
        };
        if !rest.is_ascii() {
            return None;
        }

        let (hours, minutes) = match rest.split_once(':') {
            Some((h, m)) => (h, m),
            None if rest.len() == 4 => rest.split_at(2),
            None if rest.len() <= 2 => (rest, "0"),
            None => return None,
        };

        let hours: i32 = hours.parse().ok()?;
        let minutes: i32 = minutes.parse().ok()?;
        if hours > 14 || minutes > 59 {
            return None;
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Clinic-local wall time of an appointment start
    pub fn local(&self, start: &StartTime) -> NaiveDateTime {
        match start {
            StartTime::Zoned(dt) => dt.with_timezone(&self.offset).naive_local(),
            StartTime::Local(dt) => *dt,
        }
    }

    /// Current date at the clinic
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

impl Default for ClinicClock {
    fn default() -> Self {
        Self::utc()
    }
}
