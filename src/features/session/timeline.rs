//! Session timeline.
//!
//! Holds the ordered steps of one session and a pointer to the current step.
//! The timeline knows nothing about time; the player drives it.

use super::step::ExerciseStep;
use crate::error::FitcoachError;

/// Ordered, non-empty sequence of steps with a current position.
#[derive(Debug, Clone)]
pub struct SessionTimeline {
    steps: Vec<ExerciseStep>,
    current: usize,
}

impl SessionTimeline {
    /// Create a timeline positioned on the first step.
    ///
    /// # Errors
    ///
    /// Returns `FitcoachError::InvalidSession` if `steps` is empty.
    pub fn new(steps: Vec<ExerciseStep>) -> Result<Self, FitcoachError> {
        if steps.is_empty() {
            return Err(FitcoachError::InvalidSession(
                "a session needs at least one step".to_string(),
            ));
        }
        Ok(Self { steps, current: 0 })
    }

    /// The step under the pointer.
    #[must_use]
    pub fn current_step(&self) -> &ExerciseStep {
        // `current` is always < len and len >= 1
        &self.steps[self.current]
    }

    /// Index of the current step.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the pointer is on the final step.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// All steps in order.
    #[must_use]
    pub fn steps(&self) -> &[ExerciseStep] {
        &self.steps
    }

    /// Move to the next step.
    ///
    /// Returns false, leaving the pointer in place, when already on the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Fraction of steps already completed (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        self.current as f64 / self.steps.len() as f64
    }
}
