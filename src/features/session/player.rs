//! Playback controller.
//!
//! A pure state machine: it owns the timeline and the countdown for the
//! current step and reacts to ticks, pause toggles, skips and close. It has
//! no notion of wall-clock time; a [`Ticker`](super::clock::Ticker) decides
//! when a tick happens.

use serde::{Deserialize, Serialize};

use super::plan::{WorkoutPlan, WorkoutSummary};
use super::step::ExerciseStep;
use super::timeline::SessionTimeline;
use crate::error::FitcoachError;

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Countdown is ticking
    Running,
    /// Countdown is suspended
    Paused,
    /// Last step is done (terminal)
    Finished,
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// Something the presentation layer or the workout log cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Playback moved on to a new step.
    StepChanged {
        /// Index of the new step
        index: usize,
        /// The new step
        step: ExerciseStep,
    },
    /// The final step ended.
    Finished(WorkoutSummary),
    /// The session was abandoned before finishing.
    Closed,
}

/// Drives one guided session from the first step to completion.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    timeline: SessionTimeline,
    summary: WorkoutSummary,
    remaining_secs: u32,
    state: PlaybackState,
}

impl PlaybackController {
    /// Create a controller that is running on the plan's first step.
    ///
    /// # Errors
    ///
    /// Returns `FitcoachError::InvalidSession` if the plan has no steps.
    pub fn new(plan: &WorkoutPlan) -> Result<Self, FitcoachError> {
        let timeline = SessionTimeline::new(plan.steps.clone())?;
        let remaining_secs = timeline.current_step().duration_secs;

        Ok(Self {
            timeline,
            summary: plan.summary(),
            remaining_secs,
            state: PlaybackState::Running,
        })
    }

    /// One second elapsed.
    ///
    /// Ignored unless running. A step that is already at zero (a zero-length
    /// step) advances on this tick without decrementing.
    pub fn tick(&mut self) -> Option<PlaybackEvent> {
        if self.state != PlaybackState::Running {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);

        if self.remaining_secs == 0 {
            self.advance()
        } else {
            None
        }
    }

    /// Move to the next step, or finish if this was the last one.
    pub fn advance(&mut self) -> Option<PlaybackEvent> {
        if self.state == PlaybackState::Finished {
            return None;
        }

        if !self.timeline.advance() {
            self.state = PlaybackState::Finished;
            self.remaining_secs = 0;
            tracing::info!(title = %self.summary.title, "session finished");
            return Some(PlaybackEvent::Finished(self.summary.clone()));
        }

        let step = self.timeline.current_step();
        self.remaining_secs = step.duration_secs;
        self.state = PlaybackState::Running;

        let index = self.timeline.current_index();
        tracing::debug!(index, name = %step.name, secs = step.duration_secs, "step changed");
        Some(PlaybackEvent::StepChanged {
            index,
            step: step.clone(),
        })
    }

    /// User asked for the next step regardless of the countdown.
    pub fn skip(&mut self) -> Option<PlaybackEvent> {
        tracing::debug!(
            index = self.timeline.current_index(),
            remaining = self.remaining_secs,
            "skip"
        );
        self.advance()
    }

    /// Switch between running and paused. Has no effect once finished.
    pub fn toggle_pause(&mut self) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Running => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Running,
            PlaybackState::Finished => PlaybackState::Finished,
        };
        self.state
    }

    /// Abandon the session.
    ///
    /// Returns `Closed`, or `None` if the session had already finished.
    #[must_use]
    pub fn close(self) -> Option<PlaybackEvent> {
        if self.state == PlaybackState::Finished {
            return None;
        }
        tracing::info!(
            title = %self.summary.title,
            index = self.timeline.current_index(),
            "session closed early"
        );
        Some(PlaybackEvent::Closed)
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Seconds left on the current step.
    #[must_use]
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// The step being played.
    #[must_use]
    pub fn current_step(&self) -> &ExerciseStep {
        self.timeline.current_step()
    }

    /// Index of the step being played.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.timeline.current_index()
    }

    /// The step that follows the current one, if any.
    #[must_use]
    pub fn next_step(&self) -> Option<&ExerciseStep> {
        self.timeline.steps().get(self.current_index() + 1)
    }

    /// Number of steps in the session.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.timeline.len()
    }

    /// Whether the current step is the last one.
    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.timeline.is_last()
    }

    /// Fraction of steps completed.
    #[must_use]
    pub fn session_progress(&self) -> f64 {
        if self.is_finished() {
            1.0
        } else {
            self.timeline.progress()
        }
    }

    /// Fraction of the current step's countdown still remaining (1.0 at start).
    #[must_use]
    pub fn step_progress(&self) -> f64 {
        let total = self.current_step().duration_secs;
        if total == 0 {
            return 0.0;
        }
        f64::from(self.remaining_secs) / f64::from(total)
    }

    /// Completion record that will be emitted on finish.
    #[must_use]
    pub const fn summary(&self) -> &WorkoutSummary {
        &self.summary
    }

    /// Whether the session reached its end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    /// Whether the countdown is ticking.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }
}
