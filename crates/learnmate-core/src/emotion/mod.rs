//! Emotion model.
//!
//! The emotion set is closed: six detectable emotions plus `Neutral`,
//! the state before any detection has run. Host input arrives as free
//! text, so parsing is infallible -- anything unrecognized normalizes to
//! `Neutral`, and downstream consumers treat `Neutral` as "no
//! emotion-specific data".

mod detector;

pub use detector::{Detection, EmotionDetector, SimulatedDetector};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Focused,
    Confused,
    Bored,
    Excited,
    Tired,
    /// Default before any detection; also the fallback for unknown input.
    Neutral,
}

impl Emotion {
    /// The emotions a detector may report, in canonical order.
    pub const DETECTABLE: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Focused,
        Emotion::Confused,
        Emotion::Bored,
        Emotion::Excited,
        Emotion::Tired,
    ];

    /// Parse a host-supplied emotion string.
    ///
    /// Case-insensitive; surrounding whitespace is ignored. Unknown
    /// values (including "neutral" itself) fall back to [`Emotion::Neutral`].
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "happy" => Emotion::Happy,
            "focused" => Emotion::Focused,
            "confused" => Emotion::Confused,
            "bored" => Emotion::Bored,
            "excited" => Emotion::Excited,
            "tired" => Emotion::Tired,
            _ => Emotion::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Focused => "focused",
            Emotion::Confused => "confused",
            Emotion::Bored => "bored",
            Emotion::Excited => "excited",
            Emotion::Tired => "tired",
            Emotion::Neutral => "neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Happy => "\u{1F60A}",
            Emotion::Focused => "\u{1F3AF}",
            Emotion::Confused => "\u{1F615}",
            Emotion::Bored => "\u{1F634}",
            Emotion::Excited => "\u{1F929}",
            Emotion::Tired => "\u{1F62A}",
            Emotion::Neutral => "\u{1F610}",
        }
    }

    /// One-line coaching tip shown alongside a detection result.
    pub fn coaching_tip(&self) -> &'static str {
        match self {
            Emotion::Happy => "Great mood for learning! Continue with your current lesson.",
            Emotion::Focused => "Perfect focus! This is ideal for tackling challenging topics.",
            Emotion::Confused => "Take a break or try a different explanation of the concept.",
            Emotion::Bored => "Time for a more engaging activity or a quick energizing break!",
            Emotion::Excited => "Channel that energy into hands-on practice exercises!",
            Emotion::Tired => "Consider taking a rest or switching to lighter review material.",
            Emotion::Neutral => "Keep up the great work!",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Emotion::parse(s))
    }
}
