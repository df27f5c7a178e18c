//! Deload math - what to lift given the entered weight and the week

use serde::Serialize;

/// Deload weeks keep 60% of the working weight
const DELOAD_NUM: u32 = 3;
const DELOAD_DEN: u32 = 5;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    Deload { lbs: u32 },
    Push { lbs: u32 },
}

impl Target {
    pub fn lbs(&self) -> u32 {
        match self {
            Target::Deload { lbs } | Target::Push { lbs } => *lbs,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Target::Deload { lbs } => {
                format!("📉 Deload Target: You should only lift {} lbs today.", lbs)
            }
            Target::Push { lbs } => format!("🚀 Target: Lift {} lbs with perfect form.", lbs),
        }
    }
}

/// floor(weight * 0.6), exact in integers
pub fn deload_weight(weight: u32) -> u32 {
    (u64::from(weight) * u64::from(DELOAD_NUM) / u64::from(DELOAD_DEN)) as u32
}

/// No target until something was entered
pub fn target_for(weight: u32, is_deload: bool) -> Option<Target> {
    if weight == 0 {
        return None;
    }
    Some(if is_deload {
        Target::Deload { lbs: deload_weight(weight) }
    } else {
        Target::Push { lbs: weight }
    })
}
