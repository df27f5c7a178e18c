//! Session state - everything derived from the user's settings on each redraw

use chrono::Local;
use serde::Serialize;
use tracing::debug;

use crate::schedule::{Schedule, ScheduleEntry};

/// Every Nth week is a deload week
pub const DELOAD_EVERY: u32 = 5;

pub const DEFAULT_WEEK: u32 = 1;
pub const DEFAULT_BODYWEIGHT: f64 = 200.0;

pub fn is_deload_week(week: u32) -> bool {
    week % DELOAD_EVERY == 0
}

/// Current weekday name from the system clock ("Monday", ...)
pub fn today_name() -> String {
    Local::now().format("%A").to_string()
}

/// `today` when the table has it, otherwise the table's first day
pub fn default_day(schedule: &Schedule, today: &str) -> &'static str {
    schedule.get(today).map_or(schedule.first().day, |e| e.day)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionState {
    pub current_week: u32,
    /// Shown in the sidebar, not used by any calculation yet
    pub bodyweight: f64,
    pub is_deload: bool,
    pub selected_day: &'static str,
}

impl SessionState {
    /// Derive the state from raw inputs. Never fails: week is floored at 1
    /// and an unknown day falls back to the default selection.
    pub fn resolve(
        schedule: &Schedule,
        week: u32,
        bodyweight: f64,
        selected: Option<&str>,
        today: &str,
    ) -> Self {
        let current_week = week.max(1);
        let selected_day = match selected.and_then(|d| schedule.get(d)) {
            Some(entry) => entry.day,
            None => {
                if let Some(day) = selected {
                    debug!("Unknown day {:?}, using default", day);
                }
                default_day(schedule, today)
            }
        };

        debug!(
            "Resolved session: week {} ({}), day {}",
            current_week,
            if is_deload_week(current_week) { "deload" } else { "push" },
            selected_day
        );

        Self {
            current_week,
            bodyweight,
            is_deload: is_deload_week(current_week),
            selected_day,
        }
    }

    pub fn with_week(mut self, week: u32) -> Self {
        self.current_week = week.max(1);
        self.is_deload = is_deload_week(self.current_week);
        self
    }

    pub fn with_day(mut self, day: &'static str) -> Self {
        self.selected_day = day;
        self
    }

    /// Schedule entry for the selected day
    pub fn entry(&self, schedule: &Schedule) -> &'static ScheduleEntry {
        schedule.get(self.selected_day).unwrap_or_else(|| schedule.first())
    }

    /// Sidebar status line for the current week
    pub fn week_banner(&self) -> String {
        if self.is_deload {
            "⚠ DELOAD WEEK ACTIVE: Weights reduced by 40%. Focus on technique.".to_string()
        } else {
            format!("Week {}: PUSH WEEK. Try to add weight.", self.current_week)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deload_every_fifth_week() {
        for week in [5, 10, 15, 100] {
            assert!(is_deload_week(week), "week {}", week);
        }
        for week in [1, 4, 6, 9, 11] {
            assert!(!is_deload_week(week), "week {}", week);
        }
    }

    #[test]
    fn test_default_day_today_when_known() {
        let schedule = Schedule::standard();
        assert_eq!(default_day(&schedule, "Thursday"), "Thursday");
    }

    #[test]
    fn test_default_day_falls_back_to_first() {
        let schedule = Schedule::standard();
        assert_eq!(default_day(&schedule, "Caturday"), "Monday");
        assert_eq!(default_day(&schedule, ""), "Monday");
    }

    #[test]
    fn test_today_name_is_a_schedule_key() {
        assert!(Schedule::standard().get(&today_name()).is_some());
    }

    #[test]
    fn test_resolve_uses_override() {
        let schedule = Schedule::standard();
        let state = SessionState::resolve(&schedule, 3, 180.0, Some("Friday"), "Monday");
        assert_eq!(state.selected_day, "Friday");
        assert_eq!(state.current_week, 3);
        assert!(!state.is_deload);
    }

    #[test]
    fn test_resolve_unknown_override_falls_back() {
        let schedule = Schedule::standard();
        let state = SessionState::resolve(&schedule, 1, 200.0, Some("Someday"), "Wednesday");
        assert_eq!(state.selected_day, "Wednesday");
    }

    #[test]
    fn test_resolve_clamps_week() {
        let schedule = Schedule::standard();
        let state = SessionState::resolve(&schedule, 0, 200.0, None, "Monday");
        assert_eq!(state.current_week, 1);
        assert!(!state.is_deload);
    }

    #[test]
    fn test_with_week_rederives_deload() {
        let schedule = Schedule::standard();
        let state = SessionState::resolve(&schedule, 4, 200.0, None, "Monday");
        assert!(!state.is_deload);
        let state = state.with_week(5);
        assert!(state.is_deload);
        let state = state.with_week(0);
        assert_eq!(state.current_week, 1);
    }

    #[test]
    fn test_week_banner() {
        let schedule = Schedule::standard();
        let push = SessionState::resolve(&schedule, 2, 200.0, None, "Monday");
        assert_eq!(push.week_banner(), "Week 2: PUSH WEEK. Try to add weight.");

        let deload = push.with_week(10);
        assert!(deload.week_banner().contains("DELOAD WEEK ACTIVE"));
    }

    #[test]
    fn test_entry_matches_selected_day() {
        let schedule = Schedule::standard();
        let state = SessionState::resolve(&schedule, 1, 200.0, Some("Sunday"), "Monday");
        assert_eq!(state.entry(&schedule).focus, "Total Rest");
    }
}
