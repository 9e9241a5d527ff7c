//! The activity rule tables.
//!
//! Data only -- the selection logic lives in the parent module.

use crate::emotion::Emotion;

use super::{Activity, Icon};

fn activity(
    id: &str,
    title: &str,
    description: &str,
    icon: Icon,
    duration: &str,
    points: u32,
    tag: &str,
) -> Activity {
    Activity {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        icon,
        duration: duration.into(),
        points,
        tag: tag.into(),
    }
}

/// The three activities every recommendation starts with.
pub(super) fn base_set() -> Vec<Activity> {
    vec![
        activity(
            "revision",
            "Quick Revision",
            "Review key concepts from your recent lessons",
            Icon::RefreshCw,
            "10-15 min",
            50,
            "study",
        ),
        activity(
            "break",
            "Take a Break",
            "Stretch, hydrate, and refresh your mind",
            Icon::Coffee,
            "5-10 min",
            25,
            "wellness",
        ),
        activity(
            "celebrate",
            "Celebrate Progress",
            "Acknowledge your achievements and milestones",
            Icon::Trophy,
            "2-5 min",
            75,
            "motivation",
        ),
    ]
}

/// The emotion-keyed pair, empty for `Neutral`.
pub(super) fn emotion_set(emotion: Emotion) -> Vec<Activity> {
    match emotion {
        Emotion::Happy => vec![
            activity(
                "challenge",
                "Take on a Challenge",
                "Try a more advanced topic while you're motivated",
                Icon::Target,
                "20-30 min",
                100,
                "challenge",
            ),
            activity(
                "practice",
                "Hands-on Practice",
                "Build something with what you've learned",
                Icon::Lightbulb,
                "30-45 min",
                150,
                "practice",
            ),
        ],
        Emotion::Focused => vec![
            activity(
                "deep-dive",
                "Deep Dive Session",
                "Explore complex topics in detail",
                Icon::BookOpen,
                "45-60 min",
                200,
                "study",
            ),
            activity(
                "pomodoro",
                "Pomodoro Session",
                "Structured learning with timed intervals",
                Icon::Clock,
                "25 min",
                100,
                "focus",
            ),
        ],
        Emotion::Confused => vec![
            activity(
                "basics",
                "Review Basics",
                "Go back to fundamental concepts",
                Icon::RefreshCw,
                "15-20 min",
                75,
                "review",
            ),
            activity(
                "different-approach",
                "Try Different Approach",
                "Learn the same concept through different methods",
                Icon::Lightbulb,
                "20-30 min",
                100,
                "alternative",
            ),
        ],
        Emotion::Bored => vec![
            activity(
                "gamified",
                "Gamified Learning",
                "Learn through interactive games and quizzes",
                Icon::Gamepad2,
                "15-25 min",
                125,
                "game",
            ),
            activity(
                "energizer",
                "Quick Energizer",
                "Short, engaging activities to boost motivation",
                Icon::Zap,
                "5-10 min",
                50,
                "energizer",
            ),
        ],
        Emotion::Excited => vec![
            activity(
                "project",
                "Start a Project",
                "Channel your energy into building something",
                Icon::Lightbulb,
                "60+ min",
                250,
                "project",
            ),
            activity(
                "explore",
                "Explore New Topics",
                "Discover related subjects that interest you",
                Icon::Target,
                "30-45 min",
                150,
                "exploration",
            ),
        ],
        Emotion::Tired => vec![
            activity(
                "light-review",
                "Light Review",
                "Easy review of familiar concepts",
                Icon::BookOpen,
                "10-15 min",
                50,
                "light",
            ),
            activity(
                "mindfulness",
                "Mindful Break",
                "Meditation or breathing exercises",
                Icon::Heart,
                "5-10 min",
                25,
                "wellness",
            ),
        ],
        Emotion::Neutral => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_set_has_three_fixed_entries() {
        let base = base_set();
        assert_eq!(base.len(), 3);
        assert_eq!(base[0].points, 50);
        assert_eq!(base[1].icon, Icon::Coffee);
        assert_eq!(base[2].tag, "motivation");
    }

    #[test]
    fn every_detectable_emotion_has_a_pair() {
        for emotion in Emotion::DETECTABLE {
            assert_eq!(emotion_set(emotion).len(), 2, "{emotion}");
        }
        assert!(emotion_set(Emotion::Neutral).is_empty());
    }
}
