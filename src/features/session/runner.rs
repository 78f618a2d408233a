//! Session runner.
//!
//! Couples a [`PlaybackController`] with its [`Ticker`] and forwards every
//! playback event to a [`PlaybackObserver`]. The ticker only counts while the
//! controller is running, so no tick is delivered while paused, after the
//! session finished, or after it was closed.

use std::time::Instant;

use super::clock::Ticker;
use super::plan::{WorkoutPlan, WorkoutSummary};
use super::player::{PlaybackController, PlaybackEvent, PlaybackState};
use super::step::ExerciseStep;
use crate::error::FitcoachError;

/// Receives playback events.
///
/// All methods default to doing nothing. Implementations deal with their own
/// failures; the runner never sees them.
#[cfg_attr(test, mockall::automock)]
pub trait PlaybackObserver {
    /// Playback moved to step `index`.
    fn on_step_changed(&mut self, _step: &ExerciseStep, _index: usize) {}

    /// The session reached its end.
    fn on_finished(&mut self, _summary: &WorkoutSummary) {}

    /// The session was abandoned.
    fn on_closed(&mut self) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PlaybackObserver for NoopObserver {}

impl<T: PlaybackObserver + ?Sized> PlaybackObserver for &mut T {
    fn on_step_changed(&mut self, step: &ExerciseStep, index: usize) {
        (**self).on_step_changed(step, index);
    }

    fn on_finished(&mut self, summary: &WorkoutSummary) {
        (**self).on_finished(summary);
    }

    fn on_closed(&mut self) {
        (**self).on_closed();
    }
}

/// Runs one session against a tick source.
pub struct SessionRunner<O: PlaybackObserver> {
    controller: PlaybackController,
    ticker: Ticker,
    observer: O,
}

impl<O: PlaybackObserver> SessionRunner<O> {
    /// Create a runner. Nothing ticks until [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Returns `FitcoachError::InvalidSession` if the plan has no steps.
    pub fn new(plan: &WorkoutPlan, ticker: Ticker, observer: O) -> Result<Self, FitcoachError> {
        let controller = PlaybackController::new(plan)?;
        Ok(Self {
            controller,
            ticker,
            observer,
        })
    }

    /// Start the tick source.
    pub fn start(&mut self, now: Instant) {
        self.sync_clock(now);
    }

    /// Apply every tick that elapsed up to `now`, in order.
    ///
    /// Returns the number of ticks applied. Stops early once finished.
    pub fn pump(&mut self, now: Instant) -> u32 {
        let ticks = self.ticker.poll(now);
        let mut applied = 0;

        for _ in 0..ticks {
            applied += 1;
            if let Some(event) = self.controller.tick() {
                self.dispatch(event);
            }
            if !self.controller.is_running() {
                break;
            }
        }

        self.sync_clock(now);
        applied
    }

    /// Pause or resume.
    pub fn toggle_pause(&mut self, now: Instant) -> PlaybackState {
        let state = self.controller.toggle_pause();
        tracing::debug!(%state, "pause toggled");
        self.sync_clock(now);
        state
    }

    /// Jump to the next step; the new step gets a full first second.
    pub fn skip(&mut self, now: Instant) {
        if let Some(event) = self.controller.skip() {
            self.dispatch(event);
        }
        self.ticker.stop();
        self.sync_clock(now);
    }

    /// Stop the tick source and abandon the session.
    ///
    /// The observer is told unless the session had already finished, and is
    /// handed back to the caller.
    pub fn close(self) -> O {
        let Self {
            controller,
            mut ticker,
            mut observer,
        } = self;

        ticker.stop();
        if let Some(PlaybackEvent::Closed) = controller.close() {
            observer.on_closed();
        }
        observer
    }

    /// The underlying state machine.
    #[must_use]
    pub const fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    /// The tick source.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// The observer.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Whether the session reached its end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.controller.is_finished()
    }

    fn sync_clock(&mut self, now: Instant) {
        if self.controller.is_running() {
            self.ticker.start(now);
        } else {
            self.ticker.stop();
        }
    }

    fn dispatch(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::StepChanged { index, step } => {
                self.observer.on_step_changed(&step, index);
            }
            PlaybackEvent::Finished(summary) => self.observer.on_finished(&summary),
            PlaybackEvent::Closed => self.observer.on_closed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockall::predicate::eq;

    use super::*;
    use crate::features::session::step::ExerciseType;

    fn plan(durations: &[u32]) -> WorkoutPlan {
        WorkoutPlan {
            title: "Runner".to_string(),
            focus: "Full Body".to_string(),
            difficulty: "Medium".to_string(),
            total_duration_minutes: Some(3),
            steps: durations
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    ExerciseStep::new(format!("Step {i}"), "", ExerciseType::Strength, *d)
                })
                .collect(),
        }
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    /// Records every callback in order.
    #[derive(Default)]
    struct Recording {
        events: Vec<String>,
    }

    impl PlaybackObserver for Recording {
        fn on_step_changed(&mut self, step: &ExerciseStep, index: usize) {
            self.events.push(format!("step {index} {}", step.name));
        }

        fn on_finished(&mut self, summary: &WorkoutSummary) {
            self.events.push(format!("finished {}", summary.title));
        }

        fn on_closed(&mut self) {
            self.events.push("closed".to_string());
        }
    }

    #[test]
    fn test_scenario_three_then_two() {
        let p = plan(&[3, 2]);
        let mut observer = MockPlaybackObserver::new();
        observer
            .expect_on_step_changed()
            .withf(|step, index| step.name == "Step 1" && *index == 1)
            .times(1)
            .return_const(());
        observer
            .expect_on_finished()
            .with(eq(p.summary()))
            .times(1)
            .return_const(());
        observer.expect_on_closed().never();

        let start = Instant::now();
        let mut runner = SessionRunner::new(&p, Ticker::every_second(), observer).unwrap();
        runner.start(start);

        assert_eq!(runner.pump(start + secs(3)), 3);
        assert_eq!(runner.controller().remaining_secs(), 2);
        assert_eq!(runner.pump(start + secs(5)), 2);
        assert!(runner.is_finished());
        assert!(!runner.ticker().is_active());

        // further time does nothing
        assert_eq!(runner.pump(start + secs(60)), 0);
        let _ = runner.close();
    }

    #[test]
    fn test_pump_stops_at_finish() {
        let p = plan(&[1, 1]);
        let start = Instant::now();
        let mut runner =
            SessionRunner::new(&p, Ticker::every_second(), Recording::default()).unwrap();
        runner.start(start);

        assert_eq!(runner.pump(start + secs(30)), 2);
        let observer = runner.close();
        assert_eq!(observer.events, vec!["step 1 Step 1", "finished Runner"]);
    }

    #[test]
    fn test_pause_blocks_ticks() {
        let start = Instant::now();
        let mut runner =
            SessionRunner::new(&plan(&[10]), Ticker::every_second(), NoopObserver).unwrap();
        runner.start(start);
        runner.pump(start + secs(2));

        assert_eq!(runner.toggle_pause(start + secs(2)), PlaybackState::Paused);
        assert!(!runner.ticker().is_active());
        assert_eq!(runner.pump(start + secs(7)), 0);
        assert_eq!(runner.controller().remaining_secs(), 8);

        assert_eq!(runner.toggle_pause(start + secs(7)), PlaybackState::Running);
        assert_eq!(runner.pump(start + secs(8)), 1);
        assert_eq!(runner.controller().remaining_secs(), 7);
    }

    #[test]
    fn test_skip_gives_full_first_second() {
        let p = plan(&[10, 6]);
        let start = Instant::now();
        let mut runner =
            SessionRunner::new(&p, Ticker::every_second(), Recording::default()).unwrap();
        runner.start(start);

        let skip_at = start + Duration::from_millis(700);
        runner.skip(skip_at);
        assert_eq!(runner.controller().remaining_secs(), 6);
        assert_eq!(runner.pump(start + secs(1)), 0);
        assert_eq!(runner.pump(skip_at + secs(1)), 1);
        assert_eq!(runner.controller().remaining_secs(), 5);
    }

    #[test]
    fn test_skip_while_paused_restarts_clock() {
        let start = Instant::now();
        let mut runner =
            SessionRunner::new(&plan(&[10, 10]), Ticker::every_second(), NoopObserver).unwrap();
        runner.start(start);
        runner.toggle_pause(start);
        runner.skip(start + secs(3));
        assert!(runner.ticker().is_active());
        assert_eq!(runner.controller().state(), PlaybackState::Running);
    }

    #[test]
    fn test_close_never_finishes() {
        let mut observer = MockPlaybackObserver::new();
        observer.expect_on_finished().never();
        observer.expect_on_step_changed().never();
        observer.expect_on_closed().times(1).return_const(());

        let start = Instant::now();
        let mut runner =
            SessionRunner::new(&plan(&[5, 5]), Ticker::every_second(), observer).unwrap();
        runner.start(start);
        runner.pump(start + secs(2));
        let _ = runner.close();
    }

    #[test]
    fn test_close_after_finish_is_silent() {
        let start = Instant::now();
        let mut runner =
            SessionRunner::new(&plan(&[1]), Ticker::every_second(), Recording::default()).unwrap();
        runner.start(start);
        runner.pump(start + secs(1));

        let observer = runner.close();
        assert_eq!(observer.events, vec!["finished Runner"]);
    }

    #[test]
    fn test_borrowed_observer() {
        let mut recording = Recording::default();
        {
            let start = Instant::now();
            let mut runner =
                SessionRunner::new(&plan(&[1]), Ticker::every_second(), &mut recording).unwrap();
            runner.start(start);
            runner.skip(start);
            let _ = runner.close();
        }
        assert_eq!(recording.events, vec!["finished Runner"]);
    }
}
