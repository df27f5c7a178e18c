//! HIIT interval timer - cooperative countdown driven by the caller's loop
//!
//! `Idle -> Running -> Completed`. A countdown only moves when the owner
//! calls [`IntervalTimer::tick`] or [`IntervalTimer::poll`], so nothing
//! blocks while it runs. `cancel` drops a running countdown back to Idle.

use std::time::{Duration, Instant};

use tracing::{debug, info};

/// Discrete steps in one interval
pub const INTERVAL_TICKS: u32 = 30;
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { ticks: u32 },
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { ticks: u32 },
    Completed,
}

#[derive(Debug, Clone)]
pub struct IntervalTimer {
    total_ticks: u32,
    period: Duration,
    state: TimerState,
    next_deadline: Option<Instant>,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::with_ticks(INTERVAL_TICKS, TICK_PERIOD)
    }

    pub fn with_ticks(total_ticks: u32, period: Duration) -> Self {
        Self {
            total_ticks: total_ticks.max(1),
            period,
            state: TimerState::Idle,
            next_deadline: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    /// Begin a countdown. Refused while one is already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            debug!("Timer start ignored, countdown in flight");
            return false;
        }
        info!("Interval timer started ({} ticks)", self.total_ticks);
        self.state = TimerState::Running { ticks: 0 };
        self.next_deadline = Some(now + self.period);
        true
    }

    /// Advance one step. No-op unless running.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        let TimerState::Running { ticks } = self.state else {
            return None;
        };

        let ticks = ticks + 1;
        if ticks >= self.total_ticks {
            info!("Interval timer completed");
            self.state = TimerState::Completed;
            self.next_deadline = None;
            return Some(TimerEvent::Completed);
        }

        self.state = TimerState::Running { ticks };
        self.next_deadline = self.next_deadline.map(|d| d + self.period);
        Some(TimerEvent::Tick { ticks })
    }

    /// Apply every tick whose deadline is at or before `now`.
    /// Returns the last event produced, if any.
    pub fn poll(&mut self, now: Instant) -> Option<TimerEvent> {
        let mut last = None;
        while let Some(deadline) = self.next_deadline {
            if deadline > now {
                break;
            }
            last = self.tick();
        }
        last
    }

    pub fn cancel(&mut self) {
        if self.is_running() {
            info!("Interval timer cancelled");
            self.state = TimerState::Idle;
            self.next_deadline = None;
        }
    }

    /// Fraction done, 0.0..=1.0
    pub fn progress(&self) -> f64 {
        match self.state {
            TimerState::Idle => 0.0,
            TimerState::Running { ticks } => f64::from(ticks) / f64::from(self.total_ticks),
            TimerState::Completed => 1.0,
        }
    }

    pub fn remaining_secs(&self) -> u64 {
        let left = match self.state {
            TimerState::Idle => self.total_ticks,
            TimerState::Running { ticks } => self.total_ticks - ticks,
            TimerState::Completed => 0,
        };
        self.period.as_secs() * u64::from(left)
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new()
    }
}
