//! Plan renderer - turns a schedule entry and the session into a document
//!
//! [`render_plan`] is recomputed from scratch on every interaction. The
//! resulting [`PlanView`] is drawn by the TUI, printed by `show`, or
//! serialized to JSON.

pub mod deload;

pub use deload::{Target, deload_weight, target_for};

use std::fmt;

use serde::Serialize;

use crate::inputs::{ExerciseKey, SessionInputs, WarmUpItem};
use crate::reminders::{ReminderKind, reminder, reminders_for};
use crate::schedule::{DayType, ScheduleEntry};
use crate::session::SessionState;

/// The only day with the interval timer
pub const TIMER_DAY: &str = "Thursday";

#[derive(Debug, Clone, Serialize)]
pub struct PlanView {
    pub day: &'static str,
    pub focus: &'static str,
    pub day_type: DayType,
    pub week: u32,
    pub is_deload: bool,
    pub nutrition: Option<Vec<&'static str>>,
    pub warm_up: Option<WarmUpView>,
    pub work: WorkSection,
    pub interval_timer: Option<TimerPanel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WarmUpView {
    pub primer: &'static str,
    pub items: Vec<WarmUpCheck>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WarmUpCheck {
    #[serde(skip)]
    pub item: WarmUpItem,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkSection {
    Rest { message: &'static str },
    Exercises { items: Vec<ExerciseView> },
}

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseView {
    #[serde(skip)]
    pub key: ExerciseKey,
    pub name: &'static str,
    pub sets: &'static str,
    pub reps: &'static str,
    pub note: &'static str,
    /// Present only on lifting days
    pub weight: Option<u32>,
    pub target: Option<Target>,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimerPanel {
    pub title: &'static str,
    pub hint: &'static str,
}

impl PlanView {
    pub fn header(&self) -> String {
        format!("📅 {}: {}", self.day, self.focus)
    }

    /// Rendered exercises, empty on rest days
    pub fn exercises(&self) -> &[ExerciseView] {
        match &self.work {
            WorkSection::Exercises { items } => items,
            WorkSection::Rest { .. } => &[],
        }
    }
}

pub fn render_plan(
    entry: &'static ScheduleEntry,
    state: &SessionState,
    inputs: &SessionInputs,
) -> PlanView {
    let day_type = entry.day_type;

    let nutrition = matches!(day_type, DayType::Lifting | DayType::Cardio)
        .then(|| reminders_for(ReminderKind::Nutrition));

    let warm_up = (day_type == DayType::Lifting).then(|| WarmUpView {
        primer: reminder(ReminderKind::Primer),
        items: WarmUpItem::all()
            .iter()
            .map(|&item| WarmUpCheck {
                item,
                label: item.label(),
                checked: inputs.warm_up_checked(entry.day, item),
            })
            .collect(),
    });

    let work = if day_type == DayType::Rest {
        WorkSection::Rest {
            message: reminder(ReminderKind::Rest),
        }
    } else {
        let items = entry
            .exercises
            .iter()
            .map(|ex| {
                let key = ExerciseKey::new(entry.day, ex.name);
                let weight = (day_type == DayType::Lifting).then(|| inputs.weight(&key));
                ExerciseView {
                    key,
                    name: ex.name,
                    sets: ex.sets,
                    reps: ex.reps,
                    note: ex.note,
                    weight,
                    target: weight.and_then(|w| target_for(w, state.is_deload)),
                    done: inputs.is_done(&key),
                }
            })
            .collect();
        WorkSection::Exercises { items }
    };

    let interval_timer = (state.selected_day == TIMER_DAY).then(|| TimerPanel {
        title: ReminderKind::Interval.title(),
        hint: reminder(ReminderKind::Interval),
    });

    PlanView {
        day: entry.day,
        focus: entry.focus,
        day_type,
        week: state.current_week,
        is_deload: state.is_deload,
        nutrition,
        warm_up,
        work,
        interval_timer,
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

impl fmt::Display for PlanView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f, "{:=<60}", "")?;

        if let Some(lines) = &self.nutrition {
            writeln!(f, "{} {}", ReminderKind::Nutrition.emoji(), ReminderKind::Nutrition.title())?;
            for line in lines {
                writeln!(f, "  - {}", line)?;
            }
            writeln!(f)?;
        }

        if let Some(warm_up) = &self.warm_up {
            writeln!(f, "{} {}", ReminderKind::Primer.emoji(), ReminderKind::Primer.title())?;
            writeln!(f, "  {}", warm_up.primer)?;
            for check in &warm_up.items {
                writeln!(f, "  {} {}", checkbox(check.checked), check.label)?;
            }
            writeln!(f, "{:-<60}", "")?;
        }

        writeln!(f, "🏋️ Work Set")?;
        match &self.work {
            WorkSection::Rest { message } => writeln!(f, "  {}", message)?,
            WorkSection::Exercises { items } => {
                for ex in items {
                    writeln!(f, "### {}", ex.name)?;
                    writeln!(f, "  Sets: {} | Reps: {}", ex.sets, ex.reps)?;
                    writeln!(f, "  📝 {}", ex.note)?;
                    if let Some(weight) = ex.weight {
                        writeln!(f, "  Weight (lbs): {}", weight)?;
                    }
                    if let Some(target) = &ex.target {
                        writeln!(f, "  {}", target.message())?;
                    }
                    writeln!(f, "  {} Done: {}", checkbox(ex.done), ex.name)?;
                    writeln!(f, "{:-<60}", "")?;
                }
            }
        }

        if let Some(panel) = &self.interval_timer {
            writeln!(f)?;
            writeln!(f, "{} {}", ReminderKind::Interval.emoji(), panel.title)?;
            writeln!(f, "  {}", panel.hint)?;
        }

        Ok(())
    }
}
