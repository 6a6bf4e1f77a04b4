//! Weekly appointment grid.
//!
//! Tie-break rule: when several records land in the same cell, the first
//! one in backend order occupies it. Every later one is reported as a
//! [`SlotConflict`] so the page can flag it.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};
use std::ops::Range;

use super::clock::ClinicClock;
use crate::models::AppointmentRecord;

/// Short Spanish day names indexed by days from Sunday
pub const DAY_LABELS: [&str; 7] = ["DOM", "LUN", "MAR", "MIE", "JUE", "VIE", "SAB"];

/// Days shown in a work week grid (Monday to Friday)
pub const WORK_WEEK_DAYS: u32 = 5;

/// Zero-padded hour slot key, e.g. `9 -> "09"`
pub fn hour_slot(hour: u32) -> String {
    format!("{:02}", hour)
}

/// Find the record occupying the cell `(day, hour)`.
///
/// `day` counts from Sunday (0) to Saturday (6) and `hour` is a two-digit
/// slot string such as `"09"`. Records are scanned in the given order and
/// the first whose clinic-local start matches both coordinates wins.
pub fn find_appointment<'a>(
    records: &'a [AppointmentRecord],
    clock: &ClinicClock,
    day: u32,
    hour: &str,
) -> Option<&'a AppointmentRecord> {
    records.iter().find(|record| {
        let local = clock.local(&record.start_time);
        local.weekday().num_days_from_sunday() == day && hour_slot(local.hour()) == hour
    })
}

/// Explicit date range and hour range of an agenda view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    start: NaiveDate,
    end: NaiveDate,
    days: u32,
    hours: Range<u32>,
}

impl WeekGrid {
    /// `None` when the range runs past the representable calendar
    pub fn new(start: NaiveDate, days: u32, hours: Range<u32>) -> Option<Self> {
        let end = start.checked_add_days(Days::new(days as u64))?;
        Some(Self {
            start,
            end,
            days,
            hours,
        })
    }

    /// Monday to Friday of the week containing `date`
    pub fn work_week(date: NaiveDate, hours: Range<u32>) -> Option<Self> {
        let monday =
            date.checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))?;
        Self::new(monday, WORK_WEEK_DAYS, hours)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First date after the grid
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn hours(&self) -> Range<u32> {
        self.hours.clone()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take(self.days as usize)
    }

    pub fn previous(&self) -> Option<Self> {
        let start = self.start.checked_sub_days(Days::new(7))?;
        Self::new(start, self.days, self.hours.clone())
    }

    pub fn next(&self) -> Option<Self> {
        let start = self.start.checked_add_days(Days::new(7))?;
        Self::new(start, self.days, self.hours.clone())
    }

    fn day_index(&self, at: &NaiveDateTime) -> Option<usize> {
        let date = at.date();
        if date < self.start || date >= self.end {
            return None;
        }
        Some((date - self.start).num_days() as usize)
    }

    /// Place `records` onto the grid.
    ///
    /// Records outside the date range are ignored; records inside it but
    /// outside the hour rows are only counted.
    pub fn project(&self, records: &[AppointmentRecord], clock: &ClinicClock) -> ProjectedWeek {
        let hour_count = self.hours.len();
        let mut slots: Vec<Option<AppointmentRecord>> = vec![None; self.days as usize * hour_count];
        let mut conflicts = Vec::new();
        let mut outside_hours = 0;

        for record in records {
            let local = clock.local(&record.start_time);
            let Some(day) = self.day_index(&local) else {
                continue;
            };
            if !self.hours.contains(&local.hour()) {
                outside_hours += 1;
                continue;
            }

            let hour_offset = (local.hour() - self.hours.start) as usize;
            let slot = &mut slots[day * hour_count + hour_offset];
            match slot {
                Some(kept) => {
                    tracing::warn!(
                        date = %local.date(),
                        hour = local.hour(),
                        kept = %kept.patient_name,
                        dropped = %record.patient_name,
                        "Overlapping appointments in the same agenda slot"
                    );
                    conflicts.push(SlotConflict {
                        date: local.date(),
                        hour: local.hour(),
                        kept: kept.clone(),
                        dropped: record.clone(),
                    });
                }
                None => *slot = Some(record.clone()),
            }
        }

        let columns = self
            .dates()
            .map(|date| DayColumn {
                date,
                label: day_label(date),
            })
            .collect();

        let rows = self
            .hours
            .clone()
            .enumerate()
            .map(|(hour_offset, hour)| HourRow {
                hour,
                label: format!("{}:00", hour_slot(hour)),
                cells: self
                    .dates()
                    .enumerate()
                    .map(|(day, date)| GridCell {
                        date,
                        hour,
                        appointment: slots[day * hour_count + hour_offset].take(),
                    })
                    .collect(),
            })
            .collect();

        ProjectedWeek {
            columns,
            rows,
            conflicts,
            outside_hours,
        }
    }
}

/// Column header label, e.g. `MAR 16`
pub fn day_label(date: NaiveDate) -> String {
    format!(
        "{} {}",
        DAY_LABELS[date.weekday().num_days_from_sunday() as usize],
        date.day()
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub hour: u32,
    pub appointment: Option<AppointmentRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourRow {
    pub hour: u32,
    pub label: String,
    pub cells: Vec<GridCell>,
}

/// A record that mapped onto an already occupied cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotConflict {
    pub date: NaiveDate,
    pub hour: u32,
    pub kept: AppointmentRecord,
    pub dropped: AppointmentRecord,
}

/// Grid ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedWeek {
    pub columns: Vec<DayColumn>,
    pub rows: Vec<HourRow>,
    pub conflicts: Vec<SlotConflict>,
    /// Records inside the week but outside the displayed hours
    pub outside_hours: usize,
}

impl ProjectedWeek {
    pub fn cell(&self, date: NaiveDate, hour: u32) -> Option<&GridCell> {
        self.rows
            .iter()
            .find(|row| row.hour == hour)?
            .cells
            .iter()
            .find(|cell| cell.date == date)
    }

    pub fn occupied(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.appointment.is_some())
            .count()
    }
}
