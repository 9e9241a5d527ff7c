//! Activity recommendation engine.
//!
//! A pure rule table: every query returns the fixed three-activity base
//! set, followed by the two activities keyed to the given emotion. There
//! is no ranking, no randomness, and no state -- ordering is part of the
//! contract, and ids within one result are disjoint by construction.

mod catalog;

use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;

/// A recommended activity. Records are immutable display data,
/// generated fresh on each query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique within a single recommendation result.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Symbolic icon reference, resolved by the presentation layer.
    pub icon: Icon,
    /// Free-text display string, not a machine-parseable interval.
    pub duration: String,
    pub points: u32,
    /// Open-ended display tag; see [`tag_tint`].
    pub tag: String,
}

/// Symbolic icon names, resolved by whatever renders the activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    RefreshCw,
    Coffee,
    Trophy,
    Target,
    Lightbulb,
    BookOpen,
    Clock,
    #[serde(rename = "gamepad-2")]
    Gamepad2,
    Zap,
    Heart,
}

/// Badge tints the presentation layer maps to concrete styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
    Indigo,
    Orange,
    Pink,
    Cyan,
    Lime,
    Violet,
    Teal,
    Gray,
}

/// Recommend activities for the given emotion.
///
/// The result is the base set (always the same three, in order) followed
/// by the emotion-specific pair. `Neutral` -- and therefore any input
/// that failed to parse -- gets the base set only; that fallback is
/// silent, not an error.
pub fn recommend(emotion: Emotion) -> Vec<Activity> {
    let mut activities = catalog::base_set();
    activities.extend(catalog::emotion_set(emotion));
    activities
}

/// Badge tint for an activity display tag.
///
/// Total over all strings: tags absent from the table resolve to
/// [`Tint::Gray`].
pub fn tag_tint(tag: &str) -> Tint {
    match tag {
        "study" => Tint::Blue,
        "wellness" => Tint::Green,
        "motivation" => Tint::Yellow,
        "challenge" => Tint::Red,
        "practice" => Tint::Purple,
        "focus" => Tint::Indigo,
        "review" => Tint::Orange,
        "alternative" => Tint::Pink,
        "game" => Tint::Cyan,
        "energizer" => Tint::Lime,
        "project" => Tint::Violet,
        "exploration" => Tint::Teal,
        "light" => Tint::Gray,
        _ => Tint::Gray,
    }
}
