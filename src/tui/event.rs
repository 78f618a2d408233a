//! Event handling for the player.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::FitcoachError;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Close the player.
    Quit,
    /// Pause or resume the countdown.
    TogglePause,
    /// Jump to the next step.
    Skip,
}

/// Map a key press to an action.
///
/// Once the session is finished only quitting is meaningful, and enter
/// quits as well.
pub fn map_key(key: KeyEvent, finished: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter if finished => Some(Action::Quit),
        _ if finished => None,
        KeyCode::Char(' ' | 'p') => Some(Action::TogglePause),
        KeyCode::Char('n') | KeyCode::Right | KeyCode::Enter => Some(Action::Skip),
        _ => None,
    }
}

/// Wait up to `timeout` for a key press.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn next_action(timeout: Duration, finished: bool) -> Result<Option<Action>, FitcoachError> {
    if !event::poll(timeout)
        .map_err(|e| FitcoachError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| FitcoachError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key, finished)),
        _ => Ok(None),
    }
}
