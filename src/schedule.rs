//! Weekly schedule - fixed training plan, one entry per weekday

use serde::Serialize;

/// What kind of session a day holds. Drives which plan sections show up.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum DayType {
    Lifting,
    Cardio,
    Recovery,
    Rest,
}

impl DayType {
    pub fn emoji(&self) -> &'static str {
        match self {
            DayType::Lifting => "🏋️",
            DayType::Cardio => "🫀",
            DayType::Recovery => "🧘",
            DayType::Rest => "😴",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayType::Lifting => "Lifting",
            DayType::Cardio => "Cardio",
            DayType::Recovery => "Recovery",
            DayType::Rest => "Rest",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    /// Unique within a day, doubles as the input key
    pub name: &'static str,
    pub sets: &'static str,
    pub reps: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    pub day: &'static str,
    pub focus: &'static str,
    pub day_type: DayType,
    pub exercises: &'static [Exercise],
}

/// The training week, Monday first
pub const SCHEDULE: &[ScheduleEntry] = &[
    ScheduleEntry {
        day: "Monday",
        focus: "Lower Body Power & Strength",
        day_type: DayType::Lifting,
        exercises: &[
            Exercise {
                name: "Box Jumps (Primer)",
                sets: "3",
                reps: "3",
                note: "Step down, do not jump down. Max height.",
            },
            Exercise {
                name: "Trap Bar Deadlift (Main)",
                sets: "3",
                reps: "5",
                note: "RPE 8. Leave 1-2 reps in tank.",
            },
            Exercise {
                name: "Reverse Lunges",
                sets: "3",
                reps: "8/leg",
                note: "Protects back, crushes glutes.",
            },
            Exercise {
                name: "Romanian Deadlifts",
                sets: "3",
                reps: "10-12",
                note: "3-second eccentric (lowering).",
            },
            Exercise {
                name: "Sled Push Finisher",
                sets: "5 rounds",
                reps: "20 yards",
                note: "60s rest between rounds.",
            },
        ],
    },
    ScheduleEntry {
        day: "Tuesday",
        focus: "Zone 2 Engine Building",
        day_type: DayType::Cardio,
        exercises: &[Exercise {
            name: "Rucking / Cycling / Incline Walk",
            sets: "1",
            reps: "45-60 min",
            note: "Strict Zone 2. Nasal breathing only!",
        }],
    },
    ScheduleEntry {
        day: "Wednesday",
        focus: "Upper Body Strength (V-Taper)",
        day_type: DayType::Lifting,
        exercises: &[
            Exercise {
                name: "Med Ball Slams",
                sets: "3",
                reps: "5",
                note: "Throw it through the floor.",
            },
            Exercise {
                name: "Overhead Press",
                sets: "3",
                reps: "5",
                note: "Engage glutes and core.",
            },
            Exercise {
                name: "Weighted Pull-Ups",
                sets: "3",
                reps: "6-8",
                note: "Or heavy lat pulldowns.",
            },
            Exercise {
                name: "Incline DB Bench",
                sets: "3",
                reps: "8-10",
                note: "Safer for shoulders than flat bench.",
            },
            Exercise {
                name: "Accessory Superset",
                sets: "3 rounds",
                reps: "15 Face Pulls / 10 Hammer Curls",
                note: "For rotator cuff and elbow health.",
            },
        ],
    },
    ScheduleEntry {
        day: "Thursday",
        focus: "Metabolic Conditioning (HIIT)",
        day_type: DayType::Cardio,
        exercises: &[Exercise {
            name: "Rower / Assault Bike / SkiErg",
            sets: "15-20 mins",
            reps: "30s Work / 30s Rest",
            note: "Hydrate well! Zepbound + HIIT can drain you.",
        }],
    },
    ScheduleEntry {
        day: "Friday",
        focus: "The Hybrid Athlete (Full Body)",
        day_type: DayType::Lifting,
        exercises: &[
            Exercise {
                name: "Farmer's Carries",
                sets: "4",
                reps: "40 yards",
                note: "Walk fast, stand tall.",
            },
            Exercise {
                name: "Kettlebell Swings",
                sets: "4",
                reps: "15",
                note: "Explosive hip snap.",
            },
            Exercise {
                name: "Landmine Rotations",
                sets: "3",
                reps: "10/side",
                note: "Vital for rotational power.",
            },
            Exercise {
                name: "Suitcase Deadlift",
                sets: "3",
                reps: "8/side",
                note: "Fight the urge to lean.",
            },
            Exercise {
                name: "Pump Work (Optional)",
                sets: "10 mins",
                reps: "AMRAP",
                note: "Arms/Shoulders for aesthetics.",
            },
        ],
    },
    ScheduleEntry {
        day: "Saturday",
        focus: "Active Recovery",
        day_type: DayType::Recovery,
        exercises: &[Exercise {
            name: "Walk / Swim / Yoga",
            sets: "1",
            reps: "30-60 min",
            note: "Foam roll quads and lats. Take off if beaten up.",
        }],
    },
    ScheduleEntry {
        day: "Sunday",
        focus: "Total Rest",
        day_type: DayType::Rest,
        exercises: &[],
    },
];

/// Read-only view over a schedule table
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    entries: &'static [ScheduleEntry],
}

impl Schedule {
    pub fn standard() -> Self {
        Self { entries: SCHEDULE }
    }

    pub fn entries(&self) -> &'static [ScheduleEntry] {
        self.entries
    }

    /// Day names in table order
    pub fn days(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|e| e.day)
    }

    pub fn first(&self) -> &'static ScheduleEntry {
        &self.entries[0]
    }

    /// Exact key lookup
    pub fn get(&self, day: &str) -> Option<&'static ScheduleEntry> {
        self.entries.iter().find(|e| e.day == day)
    }

    /// Lookup ignoring ASCII case (for user typed names)
    pub fn find(&self, name: &str) -> Option<&'static ScheduleEntry> {
        self.entries.iter().find(|e| e.day.eq_ignore_ascii_case(name.trim()))
    }

    pub fn index_of(&self, day: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.day == day)
    }

    /// Following day, wrapping Sunday -> Monday
    pub fn next_day(&self, day: &str) -> &'static str {
        let idx = self.index_of(day).map_or(0, |i| (i + 1) % self.entries.len());
        self.entries[idx].day
    }

    /// Previous day, wrapping Monday -> Sunday
    pub fn prev_day(&self, day: &str) -> &'static str {
        let len = self.entries.len();
        let idx = self.index_of(day).map_or(0, |i| (i + len - 1) % len);
        self.entries[idx].day
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::standard()
    }
}
