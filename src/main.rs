//! peakform - Personal weekly workout tracker
//!
//! Fixed weekly plan, deload every fifth week, HIIT timer on Thursday.

use std::io::Write;
use std::time::Instant;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::Level;

use peakform::inputs::{ExerciseKey, SessionInputs};
use peakform::plan::{TIMER_DAY, render_plan};
use peakform::reminders::{INTERVAL_DONE, ReminderKind, reminder};
use peakform::schedule::{Exercise, Schedule, ScheduleEntry};
use peakform::session::{DEFAULT_BODYWEIGHT, DEFAULT_WEEK, SessionState, today_name};
use peakform::timer::{IntervalTimer, TICK_PERIOD, TimerEvent};
use peakform::tui::App;

#[derive(Parser)]
#[command(name = "peakform")]
#[command(author, version, about = "💪 Peak Performance Tracker - weekly training plan")]
struct Cli {
    /// Current training week (every 5th week is a deload)
    #[arg(short, long, global = true, env = "PEAKFORM_WEEK",
        default_value_t = DEFAULT_WEEK, value_parser = clap::value_parser!(u32).range(1..))]
    week: u32,

    /// Your bodyweight in lbs (display only)
    #[arg(short, long, global = true, env = "PEAKFORM_BODYWEIGHT",
        default_value_t = DEFAULT_BODYWEIGHT)]
    bodyweight: f64,

    /// Day to show instead of today (e.g. "thursday")
    #[arg(short, long, global = true, value_parser = parse_day)]
    day: Option<String>,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open TUI dashboard
    Tui,

    /// Print the plan for the selected day
    Show {
        /// Output JSON instead of text
        #[arg(long)]
        json: bool,

        /// Working weight for an exercise, e.g. "Overhead Press=135"
        #[arg(long = "weight", value_parser = parse_weight)]
        weights: Vec<(String, u32)>,
    },

    /// Run the 30s HIIT interval in the terminal
    Timer,

    /// List the weekly schedule
    Days,
}

fn parse_day(s: &str) -> Result<String, String> {
    let schedule = Schedule::standard();
    schedule.find(s).map(|e| e.day.to_string()).ok_or_else(|| {
        let days: Vec<_> = schedule.days().collect();
        format!("unknown day '{}', expected one of: {}", s, days.join(", "))
    })
}

fn parse_weight(s: &str) -> Result<(String, u32), String> {
    let (name, lbs) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=LBS, got '{}'", s))?;
    let lbs = lbs
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("bad weight '{}': {}", lbs, e))?;
    Ok((name.trim().to_string(), lbs))
}

/// Exercise on the given day, name matched ignoring ASCII case
fn find_exercise(entry: &'static ScheduleEntry, name: &str) -> Result<&'static Exercise> {
    match entry.exercises.iter().find(|e| e.name.eq_ignore_ascii_case(name.trim())) {
        Some(ex) => Ok(ex),
        None => bail!("No exercise named '{}' on {}", name, entry.day),
    }
}

/// The interval timer belongs to the HIIT day only
fn ensure_timer_day(state: &SessionState) -> Result<()> {
    if state.selected_day != TIMER_DAY {
        bail!(
            "The interval timer is only available on {} (selected: {})",
            TIMER_DAY,
            state.selected_day
        );
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let schedule = Schedule::standard();
    let state = SessionState::resolve(
        &schedule,
        cli.week,
        cli.bodyweight,
        cli.day.as_deref(),
        &today_name(),
    );

    match cli.command {
        Some(Commands::Tui) | None => {
            let mut app = App::new(schedule, state);
            app.run()?;
        }

        Some(Commands::Show { json, weights }) => {
            let entry = state.entry(&schedule);
            let mut inputs = SessionInputs::new();
            for (name, lbs) in weights {
                let ex = find_exercise(entry, &name)?;
                inputs.set_weight(ExerciseKey::new(entry.day, ex.name), lbs);
            }

            let view = render_plan(entry, &state, &inputs);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", state.week_banner());
                println!();
                print!("{}", view);
            }
        }

        Some(Commands::Timer) => {
            ensure_timer_day(&state)?;
            run_timer().await?;
        }

        Some(Commands::Days) => {
            println!("Weekly schedule:");
            println!("{:-<72}", "");
            for e in schedule.entries() {
                let marker = if e.day == state.selected_day { ">" } else { " " };
                println!(
                    "{} {:10} | {:9} | {:32} | {} exercises",
                    marker,
                    e.day,
                    e.day_type.label(),
                    e.focus,
                    e.exercises.len()
                );
            }
        }
    }

    Ok(())
}

/// Standalone countdown, ctrl-c stops it
async fn run_timer() -> Result<()> {
    let mut timer = IntervalTimer::new();
    let mut interval = tokio::time::interval(TICK_PERIOD);
    // First tick fires immediately
    interval.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    println!("{} {}", ReminderKind::Interval.emoji(), reminder(ReminderKind::Interval));
    timer.start(Instant::now());
    draw_progress(&timer)?;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let event = timer.tick();
                draw_progress(&timer)?;
                if let Some(TimerEvent::Completed) = event {
                    println!("\n✅ {}", INTERVAL_DONE);
                    break;
                }
            }
            res = &mut ctrl_c => {
                res?;
                timer.cancel();
                println!("\nStopped.");
                break;
            }
        }
    }

    Ok(())
}

fn draw_progress(timer: &IntervalTimer) -> Result<()> {
    let width = timer.total_ticks() as usize;
    let filled = (timer.progress() * width as f64).round() as usize;
    print!(
        "\r[{}{}] {:>2}s left",
        "#".repeat(filled),
        " ".repeat(width - filled),
        timer.remaining_secs()
    );
    std::io::stdout().flush()?;
    Ok(())
}
