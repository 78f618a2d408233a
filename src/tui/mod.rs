//! Full-screen session player.
//!
//! Shows the current step, its countdown and the overall progress, and
//! takes pause/skip/quit from the keyboard. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;
pub use event::{map_key, Action};

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::FitcoachError;
use crate::features::session::{PlaybackObserver, SessionRunner};

/// Play a session full screen until it finishes and the user exits, or the
/// user closes it early.
///
/// Returns whether the session finished, and the observer.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or draw.
pub fn run<O: PlaybackObserver>(runner: SessionRunner<O>) -> Result<(bool, O), FitcoachError> {
    enable_raw_mode()
        .map_err(|e| FitcoachError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FitcoachError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut app = App::new(runner);
    let result = Terminal::new(backend)
        .map_err(|e| FitcoachError::Terminal(format!("Failed to create terminal: {e}")))
        .and_then(|mut terminal| {
            let looped = run_app(&mut terminal, &mut app);
            terminal.show_cursor().ok();
            looped
        });

    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();

    // closed on every path, including a failed draw
    let outcome = app.close();
    result.map(|()| outcome)
}

fn run_app<B: Backend, O: PlaybackObserver>(
    terminal: &mut Terminal<B>,
    app: &mut App<O>,
) -> Result<(), FitcoachError> {
    app.start(Instant::now());

    while !app.should_quit {
        app.on_tick(Instant::now());

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FitcoachError::Terminal(format!("Failed to draw: {e}")))?;

        let timeout = app.poll_timeout(Instant::now());
        match event::next_action(timeout, app.is_finished())? {
            Some(Action::Quit) => app.quit(),
            Some(Action::TogglePause) => app.toggle_pause(Instant::now()),
            Some(Action::Skip) => app.skip(Instant::now()),
            None => {}
        }
    }

    Ok(())
}
