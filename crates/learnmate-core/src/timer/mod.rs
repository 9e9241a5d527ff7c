mod engine;
mod session;

pub use engine::{Durations, FocusTimer, TimerMode, TimerSnapshot};
pub use session::TimerSession;
