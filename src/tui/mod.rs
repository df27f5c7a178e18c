//! TUI module - Terminal dashboard with ratatui

mod render;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::inputs::{ExerciseKey, SessionInputs, WarmUpItem};
use crate::plan::{PlanView, TIMER_DAY, render_plan};
use crate::schedule::{DayType, Schedule};
use crate::session::SessionState;
use crate::timer::IntervalTimer;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// A row in the plan the cursor can sit on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    WarmUp(WarmUpItem),
    Exercise(ExerciseKey),
}

/// Cursor stops in display order: warm-up items, then exercises
pub fn focusables(view: &PlanView) -> Vec<Focus> {
    let warm_up = view
        .warm_up
        .iter()
        .flat_map(|w| w.items.iter().map(|c| Focus::WarmUp(c.item)));
    let exercises = view.exercises().iter().map(|e| Focus::Exercise(e.key));
    warm_up.chain(exercises).collect()
}

/// App state for TUI
pub struct App {
    schedule: Schedule,
    state: SessionState,
    inputs: SessionInputs,
    timer: IntervalTimer,
    cursor: usize,
    should_quit: bool,
}

impl App {
    pub fn new(schedule: Schedule, state: SessionState) -> Self {
        Self {
            schedule,
            state,
            inputs: SessionInputs::new(),
            timer: IntervalTimer::new(),
            cursor: 0,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;
        info!("Dashboard opened on {}", self.state.selected_day);

        let result = self.event_loop(&mut terminal);

        restore_terminal()?;
        info!("Dashboard closed");
        result
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
            self.on_tick(Instant::now());
        }
        Ok(())
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn inputs(&self) -> &SessionInputs {
        &self.inputs
    }

    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Rebuilt on every redraw
    pub fn plan(&self) -> PlanView {
        render_plan(self.state.entry(&self.schedule), &self.state, &self.inputs)
    }

    pub fn focus(&self) -> Option<Focus> {
        focusables(&self.plan()).get(self.cursor).copied()
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press {
                    self.handle_key(key.code, Instant::now());
                }
        Ok(())
    }

    /// Drive the interval timer from the event loop
    pub fn on_tick(&mut self, now: Instant) {
        self.timer.poll(now);
    }

    pub fn handle_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => {
                let day = self.schedule.prev_day(self.state.selected_day);
                self.select_day(day);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let day = self.schedule.next_day(self.state.selected_day);
                self.select_day(day);
            }
            KeyCode::Char('w') => {
                let week = self.state.current_week.saturating_add(1);
                self.state = self.state.clone().with_week(week);
            }
            KeyCode::Char('W') => {
                let week = self.state.current_week.saturating_sub(1);
                self.state = self.state.clone().with_week(week);
            }
            KeyCode::Char('b') => self.state.bodyweight += 1.0,
            KeyCode::Char('B') => self.state.bodyweight = (self.state.bodyweight - 1.0).max(0.0),
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                let len = focusables(&self.plan()).len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_focused(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.step_focused_weight(1),
            KeyCode::Char('-') => self.step_focused_weight(-1),
            KeyCode::Char('0') => {
                if let Some(key) = self.focused_lift() {
                    self.inputs.set_weight(key, 0);
                }
            }
            KeyCode::Char('t') => {
                if self.state.selected_day == TIMER_DAY {
                    self.timer.start(now);
                }
            }
            KeyCode::Char('x') => self.timer.cancel(),
            _ => {}
        }
    }

    fn select_day(&mut self, day: &'static str) {
        debug!("Selected {}", day);
        if day != TIMER_DAY {
            self.timer.cancel();
        }
        self.state = self.state.clone().with_day(day);
        self.cursor = 0;
    }

    fn toggle_focused(&mut self) {
        match self.focus() {
            Some(Focus::WarmUp(item)) => {
                self.inputs.toggle_warm_up(self.state.selected_day, item);
            }
            Some(Focus::Exercise(key)) => {
                self.inputs.toggle_done(key);
            }
            None => {}
        }
    }

    /// Focused exercise when it takes a weight
    fn focused_lift(&self) -> Option<ExerciseKey> {
        if self.state.entry(&self.schedule).day_type != DayType::Lifting {
            return None;
        }
        match self.focus() {
            Some(Focus::Exercise(key)) => Some(key),
            _ => None,
        }
    }

    fn step_focused_weight(&mut self, steps: i32) {
        if let Some(key) = self.focused_lift() {
            self.inputs.step_weight(key, steps);
        }
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerState;

    fn app_on(day: &str, week: u32) -> App {
        let schedule = Schedule::standard();
        let state = SessionState::resolve(&schedule, week, 200.0, Some(day), "Monday");
        App::new(schedule, state)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, Instant::now());
    }

    #[test]
    fn test_quit() {
        let mut app = app_on("Monday", 1);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_day_navigation_resets_cursor() {
        let mut app = app_on("Monday", 1);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().selected_day, "Tuesday");
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state().selected_day, "Sunday");
    }

    #[test]
    fn test_week_keys_toggle_deload() {
        let mut app = app_on("Monday", 4);
        press(&mut app, KeyCode::Char('w'));
        assert!(app.state().is_deload);
        press(&mut app, KeyCode::Char('W'));
        assert!(!app.state().is_deload);
    }

    #[test]
    fn test_week_never_below_one() {
        let mut app = app_on("Monday", 1);
        press(&mut app, KeyCode::Char('W'));
        assert_eq!(app.state().current_week, 1);
    }

    #[test]
    fn test_bodyweight_is_inert() {
        let mut app = app_on("Monday", 1);
        let before = app.plan().to_string();
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.state().bodyweight, 201.0);
        assert_eq!(app.plan().to_string(), before);
    }

    #[test]
    fn test_focus_order_on_lifting_day() {
        let app = app_on("Monday", 1);
        let stops = focusables(&app.plan());
        assert_eq!(stops.len(), 3 + 5);
        assert_eq!(stops[0], Focus::WarmUp(WarmUpItem::Cardio));
        assert_eq!(stops[3], Focus::Exercise(ExerciseKey::new("Monday", "Box Jumps (Primer)")));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app_on("Tuesday", 1);
        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_weight_entry_and_deload_target() {
        let mut app = app_on("Monday", 5);
        // Skip the warm-up rows, land on Trap Bar Deadlift
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        for _ in 0..20 {
            press(&mut app, KeyCode::Char('+'));
        }
        let key = ExerciseKey::new("Monday", "Trap Bar Deadlift (Main)");
        assert_eq!(app.inputs().weight(&key), 100);

        let view = app.plan();
        let lift = view.exercises().iter().find(|e| e.key == key).unwrap();
        assert_eq!(lift.target.map(|t| t.lbs()), Some(60));

        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.inputs().weight(&key), 0);
    }

    #[test]
    fn test_weight_keys_ignored_on_warm_up_row() {
        let mut app = app_on("Monday", 1);
        press(&mut app, KeyCode::Char('+'));
        assert!(app.plan().exercises().iter().all(|e| e.weight == Some(0)));
    }

    #[test]
    fn test_weight_keys_ignored_on_cardio_day() {
        let mut app = app_on("Tuesday", 1);
        press(&mut app, KeyCode::Char('+'));
        let key = ExerciseKey::new("Tuesday", "Rucking / Cycling / Incline Walk");
        assert_eq!(app.inputs().weight(&key), 0);
    }

    #[test]
    fn test_toggle_checkboxes() {
        let mut app = app_on("Friday", 1);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.inputs().warm_up_checked("Friday", WarmUpItem::Cardio));

        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.inputs().is_done(&ExerciseKey::new("Friday", "Farmer's Carries")));
    }

    #[test]
    fn test_timer_only_starts_on_thursday() {
        let mut app = app_on("Wednesday", 1);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.timer().state(), TimerState::Idle);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('t'));
        assert!(app.timer().is_running());
    }

    #[test]
    fn test_timer_runs_to_completion_through_ticks() {
        let mut app = app_on("Thursday", 1);
        let t0 = Instant::now();
        app.handle_key(KeyCode::Char('t'), t0);

        app.on_tick(t0 + Duration::from_secs(29));
        assert!(app.timer().is_running());

        app.on_tick(t0 + Duration::from_secs(30));
        assert_eq!(app.timer().state(), TimerState::Completed);
    }

    #[test]
    fn test_leaving_thursday_cancels_timer() {
        let mut app = app_on("Thursday", 1);
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.timer().state(), TimerState::Idle);
    }

    #[test]
    fn test_cancel_key() {
        let mut app = app_on("Thursday", 1);
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.timer().state(), TimerState::Idle);
    }
}
