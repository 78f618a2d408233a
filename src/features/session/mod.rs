//! Guided workout sessions.
//!
//! - Plans and steps as loaded from disk
//! - The timeline and playback state machine
//! - A cooperative one-second tick source
//! - A runner that wires the two together and reports events

pub mod clock;
pub mod plan;
pub mod player;
pub mod runner;
pub mod step;
pub mod timeline;
pub mod timer;

pub use clock::Ticker;
pub use plan::{WorkoutPlan, WorkoutSummary};
pub use player::{PlaybackController, PlaybackEvent, PlaybackState};
pub use runner::{NoopObserver, PlaybackObserver, SessionRunner};
#[cfg(test)]
pub use runner::MockPlaybackObserver;
pub use step::{ExerciseStep, ExerciseType};
pub use timeline::SessionTimeline;
pub use timer::{format_minutes, format_mmss, render_progress_bar};
