//! peakform - Personal weekly workout tracker
//!
//! A fixed training week with deload discounts every fifth week and a
//! HIIT interval timer on Thursdays. Nothing is stored between runs.

pub mod inputs;
pub mod plan;
pub mod reminders;
pub mod schedule;
pub mod session;
pub mod timer;
pub mod tui;

pub use schedule::Schedule;
pub use session::SessionState;
