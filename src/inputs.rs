//! Per-session user inputs, keyed explicitly by (day, exercise)
//!
//! Nothing here outlives the process.

use std::collections::{HashMap, HashSet};

/// Step used by the weight field
pub const WEIGHT_STEP: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseKey {
    pub day: &'static str,
    pub exercise: &'static str,
}

impl ExerciseKey {
    pub fn new(day: &'static str, exercise: &'static str) -> Self {
        Self { day, exercise }
    }
}

/// The three warm-up checklist items shown on lifting days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarmUpItem {
    Cardio,
    WallSit,
    Plank,
}

impl WarmUpItem {
    pub fn all() -> &'static [WarmUpItem] {
        &[WarmUpItem::Cardio, WarmUpItem::WallSit, WarmUpItem::Plank]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WarmUpItem::Cardio => "5 Min Cardio (Bike/Walk)",
            WarmUpItem::WallSit => "2x45s Wall Sit (Iso)",
            WarmUpItem::Plank => "2x45s Plank (Iso)",
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct SessionInputs {
    weights: HashMap<ExerciseKey, u32>,
    done: HashSet<ExerciseKey>,
    warm_up: HashSet<(&'static str, WarmUpItem)>,
}

impl SessionInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entered weight in lbs, 0 when untouched
    pub fn weight(&self, key: &ExerciseKey) -> u32 {
        self.weights.get(key).copied().unwrap_or(0)
    }

    pub fn set_weight(&mut self, key: ExerciseKey, lbs: u32) {
        if lbs == 0 {
            self.weights.remove(&key);
        } else {
            self.weights.insert(key, lbs);
        }
    }

    /// Move the weight by `steps` increments of WEIGHT_STEP, floored at 0
    pub fn step_weight(&mut self, key: ExerciseKey, steps: i32) -> u32 {
        let current = self.weight(&key);
        let delta = steps.unsigned_abs().saturating_mul(WEIGHT_STEP);
        let next = if steps >= 0 {
            current.saturating_add(delta)
        } else {
            current.saturating_sub(delta)
        };
        self.set_weight(key, next);
        next
    }

    pub fn is_done(&self, key: &ExerciseKey) -> bool {
        self.done.contains(key)
    }

    /// Flip the done checkbox, returns the new value
    pub fn toggle_done(&mut self, key: ExerciseKey) -> bool {
        if !self.done.remove(&key) {
            self.done.insert(key);
            return true;
        }
        false
    }

    pub fn warm_up_checked(&self, day: &'static str, item: WarmUpItem) -> bool {
        self.warm_up.contains(&(day, item))
    }

    pub fn toggle_warm_up(&mut self, day: &'static str, item: WarmUpItem) -> bool {
        if !self.warm_up.remove(&(day, item)) {
            self.warm_up.insert((day, item));
            return true;
        }
        false
    }
}
