//! Dashboard Route
//!
//! - GET /dashboard?week=YYYY-MM-DD - Weekly agenda

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::ops::Range;
use std::sync::Arc;

use crate::schedule::WeekGrid;
use crate::session::SessionContext;
use crate::web::error::WebError;
use crate::web::state::AppState;
use crate::web::views::dashboard::{self, DashboardView};

pub const FETCH_FAILED: &str = "No se pudieron cargar las citas. Intenta nuevamente en unos minutos.";

#[derive(Debug, Default, Deserialize)]
pub struct WeekQuery {
    pub week: Option<String>,
}

impl WeekQuery {
    /// Requested anchor date; missing or invalid falls back to `today`
    pub fn anchor(&self, today: NaiveDate) -> NaiveDate {
        self.week
            .as_deref()
            .and_then(|w| NaiveDate::parse_from_str(w.trim(), "%Y-%m-%d").ok())
            .unwrap_or(today)
    }
}

/// Agenda week with both neighbours, `None` at the edges of the calendar
pub struct NavigableWeek {
    pub current: WeekGrid,
    pub previous: WeekGrid,
    pub next: WeekGrid,
}

impl NavigableWeek {
    pub fn around(anchor: NaiveDate, hours: Range<u32>) -> Option<Self> {
        let current = WeekGrid::work_week(anchor, hours)?;
        Some(Self {
            previous: current.previous()?,
            next: current.next()?,
            current,
        })
    }
}

fn week_href(grid: &WeekGrid) -> String {
    format!("/dashboard?week={}", grid.start().format("%Y-%m-%d"))
}

/// GET /dashboard
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    mut session: SessionContext,
    Query(query): Query<WeekQuery>,
) -> Response {
    let Some(token) = session.token().map(str::to_string) else {
        return Redirect::to("/").into_response();
    };

    let today = state.clock.today();
    let Some(NavigableWeek {
        current: grid,
        previous,
        next,
    }) = NavigableWeek::around(query.anchor(today), state.agenda_hours.clone())
        .or_else(|| NavigableWeek::around(today, state.agenda_hours.clone()))
    else {
        return WebError::Internal("Current week is outside the calendar".to_string())
            .into_response();
    };

    let (records, notice) = match state.api.list_appointments(&token).await {
        Ok(records) => (records, None),
        Err(e) if e.is_unauthorized() => {
            tracing::info!("Backend rejected session token, clearing session");
            session.teardown();
            return (session, Redirect::to("/?expired=1")).into_response();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rendering empty agenda after fetch failure");
            (Vec::new(), Some(FETCH_FAILED.to_string()))
        }
    };

    let week = grid.project(&records, &state.clock);
    tracing::debug!(
        week = %grid.start(),
        occupied = week.occupied(),
        conflicts = week.conflicts.len(),
        "Projected agenda"
    );

    Html(dashboard::render(DashboardView {
        week,
        week_start: grid.start(),
        previous_href: week_href(&previous),
        next_href: week_href(&next),
        notice,
    }))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_anchor() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 17).unwrap();
        let query = |week: Option<&str>| WeekQuery {
            week: week.map(String::from),
        };

        assert_eq!(query(None).anchor(today), today);
        assert_eq!(query(Some("mañana")).anchor(today), today);
        assert_eq!(
            query(Some("2026-01-07")).anchor(today),
            NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()
        );
    }

    #[test]
    fn test_navigable_week_at_calendar_edges() {
        assert!(NavigableWeek::around(NaiveDate::MAX, 9..12).is_none());
        assert!(NavigableWeek::around(NaiveDate::MIN, 9..12).is_none());

        let week = NavigableWeek::around(NaiveDate::from_ymd_opt(2025, 12, 17).unwrap(), 9..12)
            .unwrap();
        assert_eq!(week.previous.start(), NaiveDate::from_ymd_opt(2025, 12, 8).unwrap());
        assert_eq!(week.current.start(), NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
        assert_eq!(week.next.start(), NaiveDate::from_ymd_opt(2025, 12, 22).unwrap());
    }
}
