//! Focus timer engine.
//!
//! The engine is a tick-driven state machine. It does not use internal
//! threads or read the wall clock -- the caller is responsible for
//! invoking `tick()` once per second while the timer runs, which also
//! makes deterministic tests trivial. [`super::TimerSession`] wraps it
//! in a real 1 Hz tick source.
//!
//! ## Mode cycle
//!
//! ```text
//! Focus -> ShortBreak -> Focus -> ... -> LongBreak (every 4th focus)
//! ```
//!
//! An interval that runs down to zero stops the clock, moves to the next
//! mode at full duration, and yields a completion event. Manual commands
//! (`reset`, `switch_mode`) never advance the session counter.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::recommend::Tint;

/// Completed focus sessions per long-break cycle.
const SESSIONS_PER_LONG_BREAK: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub const ALL: [TimerMode; 3] = [
        TimerMode::Focus,
        TimerMode::ShortBreak,
        TimerMode::LongBreak,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Focus => "Focus",
            TimerMode::ShortBreak => "Break",
            TimerMode::LongBreak => "Long Break",
        }
    }

    /// Badge tint for the mode indicator.
    pub fn tint(&self) -> Tint {
        match self {
            TimerMode::Focus => Tint::Red,
            TimerMode::ShortBreak => Tint::Green,
            TimerMode::LongBreak => Tint::Blue,
        }
    }

    /// Tip block shown under the timer.
    pub fn tip(&self) -> &'static str {
        match self {
            TimerMode::Focus => {
                "Eliminate distractions, stay hydrated, and focus on one task at a time."
            }
            TimerMode::ShortBreak | TimerMode::LongBreak => {
                "Step away from your screen, stretch, take deep breaths, or grab a healthy snack."
            }
        }
    }
}

/// Per-mode interval lengths in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub focus_secs: u32,
    pub short_break_secs: u32,
    pub long_break_secs: u32,
}

impl Durations {
    pub fn for_mode(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus_secs,
            TimerMode::ShortBreak => self.short_break_secs,
            TimerMode::LongBreak => self.long_break_secs,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus_secs: 25 * 60,
            short_break_secs: 5 * 60,
            long_break_secs: 15 * 60,
        }
    }
}

/// Point-in-time view of the timer, published to the host on every
/// state change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub mode: TimerMode,
    pub seconds_remaining: u32,
    pub duration_secs: u32,
    pub is_running: bool,
    pub completed_focus_sessions: u32,
    /// 0.0 .. 1.0 progress within the current interval.
    pub progress: f64,
    /// Zero-padded MM:SS rendering of the remaining time.
    pub clock: String,
}

/// Core timer state machine.
///
/// Invariants: `seconds_remaining` never exceeds the current mode's
/// duration, and the timer is never running at zero -- the tick that
/// reaches zero completes the interval immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    durations: Durations,
    mode: TimerMode,
    seconds_remaining: u32,
    is_running: bool,
    completed_focus_sessions: u32,
}

impl FocusTimer {
    /// Create a paused timer in Focus mode at full duration.
    pub fn new(durations: Durations) -> Self {
        Self {
            durations,
            mode: TimerMode::Focus,
            seconds_remaining: durations.focus_secs,
            is_running: false,
            completed_focus_sessions: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus_sessions
    }

    pub fn durations(&self) -> Durations {
        self.durations
    }

    /// Duration of the current mode in seconds.
    pub fn duration_secs(&self) -> u32 {
        self.durations.for_mode(self.mode)
    }

    /// 0.0 .. 1.0 progress within the current interval.
    pub fn progress_fraction(&self) -> f64 {
        let total = self.duration_secs();
        if total == 0 {
            return 0.0;
        }
        f64::from(total - self.seconds_remaining) / f64::from(total)
    }

    /// Zero-padded MM:SS rendering of the remaining time.
    pub fn formatted_time(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.seconds_remaining / 60,
            self.seconds_remaining % 60
        )
    }

    /// Focus sessions left before the next long break. Reads 4 right
    /// after a long break is entered; meaningful once at least one
    /// session has completed.
    pub fn sessions_until_long_break(&self) -> u32 {
        SESSIONS_PER_LONG_BREAK - (self.completed_focus_sessions % SESSIONS_PER_LONG_BREAK)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            duration_secs: self.duration_secs(),
            is_running: self.is_running,
            completed_focus_sessions: self.completed_focus_sessions,
            progress: self.progress_fraction(),
            clock: self.formatted_time(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the countdown. No-op if already running or exhausted.
    pub fn start(&mut self) -> Option<Event> {
        if self.is_running || self.seconds_remaining == 0 {
            return None;
        }
        self.is_running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Pause the countdown. No-op if not running.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.is_running = false;
        Some(Event::TimerPaused {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Stop and refill the current mode. The session counter is untouched.
    pub fn reset(&mut self) -> Option<Event> {
        self.is_running = false;
        self.seconds_remaining = self.duration_secs();
        Some(Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        })
    }

    /// Jump to `target` at full duration, paused. Valid from any state,
    /// including `target == current mode`; the session counter is untouched.
    pub fn switch_mode(&mut self, target: TimerMode) -> Option<Event> {
        let from = self.mode;
        self.mode = target;
        self.seconds_remaining = self.durations.for_mode(target);
        self.is_running = false;
        Some(Event::ModeSwitched {
            from,
            to: target,
            at: Utc::now(),
        })
    }

    /// Advance the countdown by one second.
    ///
    /// Call once per second while running. Returns the completion event
    /// when this tick reaches zero; otherwise `None`. Ticks while paused
    /// are ignored, so a stale tick after a manual transition cannot
    /// corrupt state.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running || self.seconds_remaining == 0 {
            return None;
        }
        self.seconds_remaining -= 1;
        if self.seconds_remaining > 0 {
            return None;
        }
        Some(self.complete())
    }

    /// Interval ran down naturally: stop, count a focus session if one
    /// just finished, and move to the next mode at full duration.
    fn complete(&mut self) -> Event {
        self.is_running = false;
        let finished = self.mode;
        self.mode = if finished == TimerMode::Focus {
            self.completed_focus_sessions += 1;
            if self.completed_focus_sessions % SESSIONS_PER_LONG_BREAK == 0 {
                TimerMode::LongBreak
            } else {
                TimerMode::ShortBreak
            }
        } else {
            TimerMode::Focus
        };
        self.seconds_remaining = self.duration_secs();
        Event::TimerCompleted {
            finished,
            next: self.mode,
            completed_focus_sessions: self.completed_focus_sessions,
            at: Utc::now(),
        }
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short() -> Durations {
        Durations {
            focus_secs: 3,
            short_break_secs: 2,
            long_break_secs: 4,
        }
    }

    #[test]
    fn starts_paused_in_focus_at_full_duration() {
        let timer = FocusTimer::default();
        assert_eq!(timer.mode(), TimerMode::Focus);
        assert_eq!(timer.seconds_remaining(), 1500);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_sessions(), 0);
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut timer = FocusTimer::default();
        assert!(timer.start().is_some());
        assert!(timer.start().is_none());
        assert!(timer.is_running());
    }

    #[test]
    fn pause_without_running_is_a_no_op() {
        let mut timer = FocusTimer::default();
        assert!(timer.pause().is_none());
        timer.start();
        assert!(timer.pause().is_some());
        assert!(!timer.is_running());
    }

    #[test]
    fn ticks_are_ignored_while_paused() {
        let mut timer = FocusTimer::default();
        assert!(timer.tick().is_none());
        assert_eq!(timer.seconds_remaining(), 1500);
    }

    #[test]
    fn focus_completion_enters_short_break_paused() {
        let mut timer = FocusTimer::new(short());
        timer.start();
        assert!(timer.tick().is_none());
        assert!(timer.tick().is_none());
        let event = timer.tick().expect("third tick completes");
        match event {
            Event::TimerCompleted {
                finished,
                next,
                completed_focus_sessions,
                ..
            } => {
                assert_eq!(finished, TimerMode::Focus);
                assert_eq!(next, TimerMode::ShortBreak);
                assert_eq!(completed_focus_sessions, 1);
            }
            other => panic!("expected TimerCompleted, got {other:?}"),
        }
        assert!(!timer.is_running());
        assert_eq!(timer.seconds_remaining(), 2);
    }

    #[test]
    fn break_completion_returns_to_focus() {
        let mut timer = FocusTimer::new(short());
        timer.switch_mode(TimerMode::ShortBreak);
        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.mode(), TimerMode::Focus);
        assert_eq!(timer.seconds_remaining(), 3);
        // Breaks never count as sessions.
        assert_eq!(timer.completed_focus_sessions(), 0);
    }

    #[test]
    fn start_refuses_a_zero_duration_interval() {
        let mut timer = FocusTimer::new(Durations {
            focus_secs: 0,
            short_break_secs: 2,
            long_break_secs: 4,
        });
        assert!(timer.start().is_none());
        assert!(!timer.is_running());
    }

    #[test]
    fn formatted_time_is_zero_padded() {
        let mut timer = FocusTimer::default();
        assert_eq!(timer.formatted_time(), "25:00");
        timer.start();
        timer.tick();
        assert_eq!(timer.formatted_time(), "24:59");
        timer.switch_mode(TimerMode::ShortBreak);
        assert_eq!(timer.formatted_time(), "05:00");
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut timer = FocusTimer::default();
        timer.start();
        timer.tick();
        let snap = timer.snapshot();
        assert_eq!(snap.mode, TimerMode::Focus);
        assert_eq!(snap.seconds_remaining, 1499);
        assert_eq!(snap.duration_secs, 1500);
        assert!(snap.is_running);
        assert_eq!(snap.clock, "24:59");
        assert!(snap.progress > 0.0 && snap.progress < 1.0);
    }

    #[test]
    fn mode_metadata_is_total() {
        for mode in TimerMode::ALL {
            assert!(!mode.label().is_empty());
            assert!(!mode.tip().is_empty());
        }
        assert_eq!(TimerMode::Focus.tint(), Tint::Red);
        assert_eq!(TimerMode::LongBreak.tint(), Tint::Blue);
    }
}
