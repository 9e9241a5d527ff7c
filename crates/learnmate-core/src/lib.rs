//! # LearnMate Core Library
//!
//! This library provides the core logic for the LearnMate learning
//! companion: the focus-timer state machine, the activity recommendation
//! engine, and the emotion model that feeds it. The CLI binary is a thin
//! host shell over this library; a GUI would sit on the same surface.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven state machine that requires the
//!   caller (or a [`timer::TimerSession`]) to invoke `tick()` once per
//!   second while running
//! - **Timer Session**: a Tokio task owning one engine, serializing
//!   commands and 1 Hz ticks so a manual transition never races a
//!   pending tick
//! - **Recommendation Engine**: a pure function from emotion to an
//!   ordered activity list
//! - **Emotion Model**: the closed emotion set plus a pluggable
//!   detector capability
//!
//! ## Key Components
//!
//! - [`FocusTimer`]: core timer state machine
//! - [`TimerSession`]: cancellable 1 Hz tick source
//! - [`recommend`]: emotion-keyed activity recommendations
//! - [`Config`]: application configuration management

pub mod config;
pub mod emotion;
pub mod error;
pub mod events;
pub mod recommend;
pub mod timer;

pub use config::Config;
pub use emotion::{Detection, Emotion, EmotionDetector, SimulatedDetector};
pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use recommend::{recommend, tag_tint, Activity, Icon, Tint};
pub use timer::{Durations, FocusTimer, TimerMode, TimerSession, TimerSnapshot};
