//! Application state for the full-screen player.

use std::time::{Duration, Instant};

use crate::features::session::{PlaybackController, PlaybackObserver, PlaybackState, SessionRunner};

/// How often the screen is redrawn when no tick is due.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Player state.
pub struct App<O: PlaybackObserver> {
    runner: SessionRunner<O>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<O: PlaybackObserver> App<O> {
    /// Wrap a runner that has not been started yet.
    pub const fn new(runner: SessionRunner<O>) -> Self {
        Self {
            runner,
            status: None,
            should_quit: false,
        }
    }

    /// Start the countdown.
    pub fn start(&mut self, now: Instant) {
        self.runner.start(now);
        self.status = Some("space:pause | n:next | q:quit".to_string());
    }

    /// Apply elapsed ticks.
    pub fn on_tick(&mut self, now: Instant) {
        if self.runner.pump(now) > 0 && self.runner.is_finished() {
            self.status = Some("Press q or enter to exit".to_string());
        }
    }

    /// Pause or resume.
    pub fn toggle_pause(&mut self, now: Instant) {
        let state = self.runner.toggle_pause(now);
        self.status = match state {
            PlaybackState::Paused => Some("Paused. Press space to resume".to_string()),
            PlaybackState::Running => Some("space:pause | n:next | q:quit".to_string()),
            PlaybackState::Finished => self.status.take(),
        };
    }

    /// Jump to the next step.
    pub fn skip(&mut self, now: Instant) {
        self.runner.skip(now);
        if self.runner.is_finished() {
            self.status = Some("Press q or enter to exit".to_string());
        }
    }

    /// Ask the event loop to stop.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// How long the event loop may block before something needs doing.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.runner
            .ticker()
            .time_until_next(now)
            .map_or(FRAME_INTERVAL, |d| d.min(FRAME_INTERVAL))
    }

    /// The playback state machine, for rendering.
    pub const fn controller(&self) -> &PlaybackController {
        self.runner.controller()
    }

    /// Whether the session reached its end.
    pub fn is_finished(&self) -> bool {
        self.runner.is_finished()
    }

    /// Tear down the session and hand the observer back.
    ///
    /// Returns whether the session had finished.
    pub fn close(self) -> (bool, O) {
        let finished = self.runner.is_finished();
        (finished, self.runner.close())
    }
}
