//! Agenda scheduling: clinic clock and weekly grid projection.

mod clock;
mod grid;

pub use clock::ClinicClock;
pub use grid::{
    day_label, find_appointment, hour_slot, DayColumn, GridCell, HourRow, ProjectedWeek,
    SlotConflict, WeekGrid, DAY_LABELS, WORK_WEEK_DAYS,
};
