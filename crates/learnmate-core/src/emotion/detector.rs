//! Pluggable emotion detection capability.
//!
//! Detection is an injected dependency: the recommendation and timer
//! engines never call it, the host does. The only implementation shipped
//! here simulates inference latency and reports a random emotion, which
//! is enough to drive the rest of the system; a real model slots in by
//! implementing [`EmotionDetector`].

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use super::Emotion;

/// Result of one detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub emotion: Emotion,
    /// Confidence, percent.
    pub confidence: u8,
}

/// Asynchronous detection contract.
///
/// `detect` suspends for however long inference takes and resolves with
/// a single reading. Implementations may carry mutable state (camera
/// handles, RNGs, model sessions).
#[allow(async_fn_in_trait)]
pub trait EmotionDetector {
    async fn detect(&mut self) -> Detection;
}

/// Stand-in detector: sleeps for a configured latency, then reports a
/// uniformly random detectable emotion with 70-100% confidence.
#[derive(Debug)]
pub struct SimulatedDetector {
    rng: Pcg32,
    latency: Duration,
}

impl SimulatedDetector {
    pub fn new(latency: Duration) -> Self {
        Self {
            rng: Pcg32::from_entropy(),
            latency,
        }
    }

    /// Seeded constructor for reproducible runs.
    pub fn with_seed(latency: Duration, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            latency,
        }
    }
}

impl EmotionDetector for SimulatedDetector {
    async fn detect(&mut self) -> Detection {
        sleep(self.latency).await;
        let emotion = Emotion::DETECTABLE[self.rng.gen_range(0..Emotion::DETECTABLE.len())];
        let confidence = self.rng.gen_range(70..=100u8);
        Detection { emotion, confidence }
    }
}
