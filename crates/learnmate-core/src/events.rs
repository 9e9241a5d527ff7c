use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;
use crate::timer::TimerMode;

/// Every state change in the system produces an Event.
/// The host shell subscribes to them; emission is fire-and-forget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: TimerMode,
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    /// Manual mode switch; never counts toward completed sessions.
    ModeSwitched {
        from: TimerMode,
        to: TimerMode,
        at: DateTime<Utc>,
    },
    /// An interval ran down to zero. Carries the mode that ended and the
    /// mode the timer moved to, paused at full duration.
    TimerCompleted {
        finished: TimerMode,
        next: TimerMode,
        completed_focus_sessions: u32,
        at: DateTime<Utc>,
    },
    EmotionDetected {
        emotion: Emotion,
        /// Detector confidence, percent (70-100 for the simulated model).
        confidence: u8,
        at: DateTime<Utc>,
    },
}
