//! Reminders - fixed coaching copy shown around the plan

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderKind {
    Nutrition, // Stack & nutrition, lifting and cardio days
    Primer,    // Before the warm-up
    Rest,      // Replaces the work sets on rest days
    Interval,  // HIIT timer hint
}

impl ReminderKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            ReminderKind::Nutrition => "💊",
            ReminderKind::Primer => "🔥",
            ReminderKind::Rest => "😴",
            ReminderKind::Interval => "⏱",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReminderKind::Nutrition => "Stack & Nutrition Reminder",
            ReminderKind::Primer => "The Unbreakable Warm-Up",
            ReminderKind::Rest => "Rest Day",
            ReminderKind::Interval => "HIIT Interval Timer",
        }
    }
}

pub struct Reminder {
    pub kind: ReminderKind,
    pub text: &'static str,
}

pub const REMINDERS: &[Reminder] = &[
    Reminder {
        kind: ReminderKind::Nutrition,
        text: "Tirzepatide: Ensure you have eaten enough protein before training.",
    },
    Reminder {
        kind: ReminderKind::Nutrition,
        text: "Hydration: Add electrolytes, especially for HIIT.",
    },
    Reminder {
        kind: ReminderKind::Primer,
        text: "BPC-157 Primer: Stimulate collagen before loading.",
    },
    Reminder {
        kind: ReminderKind::Rest,
        text: "Enjoy your Sunday. Meal prep for the week. High protein today.",
    },
    Reminder {
        kind: ReminderKind::Interval,
        text: "Do 30s Hard / 30s Easy",
    },
];

/// Shown when the interval countdown finishes
pub const INTERVAL_DONE: &str = "SWITCH INTERVAL!";

/// All reminder lines of one kind, in table order
pub fn reminders_for(kind: ReminderKind) -> Vec<&'static str> {
    REMINDERS
        .iter()
        .filter(|r| r.kind == kind)
        .map(|r| r.text)
        .collect()
}

/// First line of a kind; every kind has at least one
pub fn reminder(kind: ReminderKind) -> &'static str {
    REMINDERS
        .iter()
        .find(|r| r.kind == kind)
        .map_or("", |r| r.text)
}
