//! Drawing for the dashboard: sidebar, plan, timer gauge, footer

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
};

use super::{App, Focus, focusables};
use crate::plan::{PlanView, WorkSection};
use crate::reminders::{INTERVAL_DONE, ReminderKind};
use crate::timer::TimerState;

const SIDEBAR_WIDTH: u16 = 36;
const TIMER_HEIGHT: u16 = 5;
const KEY_HELP: &str = "q: quit | ←/→: day | w/W: week | b/B: bodyweight | ↑/↓: move | \
space: check | +/-: weight | t: timer | x: stop";

impl App {
    pub(super) fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let view = self.plan();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        // Header
        let header = Paragraph::new(format!("{} {}", view.day_type.emoji(), view.header()))
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL).title("Peak Performance Tracker"));
        frame.render_widget(header, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(30)])
            .split(chunks[1]);

        self.render_sidebar(frame, body[0]);

        let plan_area = if view.interval_timer.is_some() {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(5), Constraint::Length(TIMER_HEIGHT)])
                .split(body[1]);
            self.render_timer(frame, split[1], &view);
            split[0]
        } else {
            body[1]
        };

        self.render_plan(frame, plan_area, &view);

        // Footer
        let footer = Paragraph::new(KEY_HELP)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(9)])
            .split(area);

        let banner_style = if self.state.is_deload {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Green)
        };

        let settings = vec![
            Line::from(vec![
                Span::raw("Current Training Week: "),
                Span::styled(self.state.current_week.to_string(), Style::default().bold()),
            ]),
            Line::from(format!("Your Bodyweight (lbs): {}", self.state.bodyweight)),
            Line::from(""),
            Line::from(Span::styled(self.state.week_banner(), banner_style)),
        ];
        let settings = Paragraph::new(settings)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("User Settings"));
        frame.render_widget(settings, chunks[0]);

        let items: Vec<ListItem> = self
            .schedule
            .entries()
            .iter()
            .map(|e| ListItem::new(format!("{} {}", e.day_type.emoji(), e.day)))
            .collect();
        let mut list_state = ListState::default();
        list_state.select(self.schedule.index_of(self.state.selected_day));

        let days = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Select Day"))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        frame.render_stateful_widget(days, chunks[1], &mut list_state);
    }

    fn render_plan(&self, frame: &mut Frame, area: Rect, view: &PlanView) {
        let focus = focusables(view).get(self.cursor).copied();
        let (lines, focus_line) = plan_lines(view, focus);

        // Keep the cursor row on screen
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = focus_line
            .map(|line| line.saturating_sub(visible / 2))
            .unwrap_or(0);

        let plan = Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .block(Block::default().borders(Borders::ALL).title("Plan"));
        frame.render_widget(plan, area);
    }

    fn render_timer(&self, frame: &mut Frame, area: Rect, view: &PlanView) {
        let Some(panel) = &view.interval_timer else {
            return;
        };

        let (label, color) = match self.timer.state() {
            TimerState::Idle => (format!("{} (t: start)", panel.hint), Color::DarkGray),
            TimerState::Running { .. } => {
                (format!("{}s left", self.timer.remaining_secs()), Color::Cyan)
            }
            TimerState::Completed => (INTERVAL_DONE.to_string(), Color::Green),
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} {}", ReminderKind::Interval.emoji(), panel.title)),
            )
            .gauge_style(Style::default().fg(color))
            .ratio(self.timer.progress())
            .label(label);
        frame.render_widget(gauge, area);
    }
}

fn check(checked: bool) -> &'static str {
    if checked { "[x] " } else { "[ ] " }
}

/// Plan as styled lines plus the index of the focused row
fn plan_lines(view: &PlanView, focus: Option<Focus>) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut focus_line = None;
    let cursor_style = Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    if let Some(nutrition) = &view.nutrition {
        let kind = ReminderKind::Nutrition;
        lines.push(Line::from(format!("{} {}", kind.emoji(), kind.title())).bold());
        for text in nutrition {
            lines.push(Line::from(format!("  - {}", text)));
        }
        lines.push(Line::from(""));
    }

    if let Some(warm_up) = &view.warm_up {
        let kind = ReminderKind::Primer;
        lines.push(Line::from(format!("{} {}", kind.emoji(), kind.title())).bold());
        let primer_style = Style::default().fg(Color::Blue);
        let primer = Span::styled(format!("  {}", warm_up.primer), primer_style);
        lines.push(Line::from(primer));
        for item in &warm_up.items {
            let mut line = Line::from(format!("  {}{}", check(item.checked), item.label));
            if focus == Some(Focus::WarmUp(item.item)) {
                focus_line = Some(lines.len());
                line = line.style(cursor_style);
            }
            lines.push(line);
        }
        lines.push(Line::from(Span::styled("─".repeat(40), dim)));
    }

    lines.push(Line::from("🏋️ Work Set").bold());

    match &view.work {
        WorkSection::Rest { message } => lines.push(Line::from(format!("  {}", message))),
        WorkSection::Exercises { items } => {
            for ex in items {
                let name = Span::styled(ex.name, Style::default().fg(Color::Cyan).bold());
                lines.push(Line::from(name));
                lines.push(Line::from(vec![
                    Span::raw("  Sets: "),
                    Span::styled(ex.sets, Style::default().bold()),
                    Span::raw("  Reps: "),
                    Span::styled(ex.reps, Style::default().bold()),
                ]));
                lines.push(Line::from(Span::styled(format!("  📝 {}", ex.note), dim)));

                if let Some(weight) = ex.weight {
                    lines.push(Line::from(format!("  Weight (lbs): {}", weight)));
                }
                if let Some(target) = &ex.target {
                    lines.push(Line::from(format!("  {}", target.message())));
                }

                let mut done = Line::from(format!("  {}Done: {}", check(ex.done), ex.name));
                if focus == Some(Focus::Exercise(ex.key)) {
                    focus_line = Some(lines.len());
                    done = done.style(cursor_style);
                }
                lines.push(done);
                lines.push(Line::from(""));
            }
        }
    }

    (lines, focus_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ExerciseKey;
    use crate::schedule::Schedule;
    use crate::session::SessionState;
    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn app_on(day: &str, week: u32) -> App {
        let schedule = Schedule::standard();
        let state = SessionState::resolve(&schedule, week, 200.0, Some(day), "Monday");
        App::new(schedule, state)
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 60)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_draws_header_and_sidebar() {
        let screen = draw(&app_on("Monday", 2));
        assert!(screen.contains("Monday: Lower Body Power & Strength"));
        assert!(screen.contains("User Settings"));
        assert!(screen.contains("Week 2: PUSH WEEK"));
        assert!(screen.contains("Select Day"));
    }

    #[test]
    fn test_draws_deload_banner() {
        let screen = draw(&app_on("Monday", 5));
        assert!(screen.contains("DELOAD WEEK ACTIVE"));
    }

    #[test]
    fn test_draws_rest_day() {
        let screen = draw(&app_on("Sunday", 1));
        assert!(screen.contains("Enjoy your Sunday"));
        assert!(!screen.contains("Done:"));
        assert!(!screen.contains("HIIT Interval Timer"));
    }

    #[test]
    fn test_draws_timer_on_thursday() {
        let mut app = app_on("Thursday", 1);
        let screen = draw(&app);
        assert!(screen.contains("HIIT Interval Timer"));
        assert!(screen.contains("Do 30s Hard / 30s Easy"));

        let t0 = Instant::now();
        app.handle_key(KeyCode::Char('t'), t0);
        app.on_tick(t0 + std::time::Duration::from_secs(30));
        assert!(draw(&app).contains("SWITCH INTERVAL!"));
    }

    #[test]
    fn test_completed_timer_label_survives_day_change() {
        let mut app = app_on("Thursday", 1);
        let t0 = Instant::now();
        app.handle_key(KeyCode::Char('t'), t0);
        app.on_tick(t0 + std::time::Duration::from_secs(30));

        app.handle_key(KeyCode::Right, t0);
        app.handle_key(KeyCode::Left, t0);
        assert_eq!(app.state().selected_day, "Thursday");

        let screen = draw(&app);
        assert!(screen.contains("SWITCH INTERVAL!"));
        assert!(!screen.contains("(t: start)"));
    }

    #[test]
    fn test_plan_lines_mark_focus() {
        let app = app_on("Wednesday", 1);
        let view = app.plan();
        let key = ExerciseKey::new("Wednesday", "Overhead Press");
        let (lines, focus_line) = plan_lines(&view, Some(Focus::Exercise(key)));
        let row = focus_line.unwrap();
        let text: String = lines[row].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "  [ ] Done: Overhead Press");
    }

    #[test]
    fn test_plan_lines_show_target() {
        let mut app = app_on("Wednesday", 1);
        // Cursor to Med Ball Slams, then one step of weight
        for _ in 0..3 {
            app.handle_key(KeyCode::Down, Instant::now());
        }
        app.handle_key(KeyCode::Char('+'), Instant::now());
        let screen = draw(&app);
        assert!(screen.contains("Target: Lift 5 lbs with perfect form."));
    }
}
