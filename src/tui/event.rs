use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events, decoded from crossterm.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Bound keys (mapped to core actions by the event loop)
    /// Ctrl+C - toggle the selected task's completion flag.
    ToggleDone,
    /// Ctrl+D - delete the selected task.
    DeleteTask,
    /// Enter - submit the input buffer as a new task.
    Submit,
    /// Esc - quit.
    Escape,

    // Default handling (input editing and list navigation)
    InputChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ListUp,
    ListDown,

    /// Terminal resized to (width, height).
    Resize(u16, u16),
    /// A non-fatal decode failure; recorded on the app's error field.
    Error(String),
}

/// Poll for an event, blocking up to `timeout`.
///
/// A failed poll is an unrecoverable terminal problem and propagates as an
/// `Err`, which tears the event loop down. A failed read after a successful
/// poll is surfaced as `TuiEvent::Error` so the loop can record it and keep
/// running.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read() {
        Ok(event) => event,
        Err(e) => return Ok(Some(TuiEvent::Error(format!("event read failed: {e}")))),
    };
    Ok(decode(event))
}

/// Poll without blocking; used to drain everything pending before a redraw.
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

fn decode(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ToggleDone),
                (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(TuiEvent::DeleteTask),
                (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
                    Some(TuiEvent::InputChar(c))
                }
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::ListUp),
                (_, KeyCode::Down) => Some(TuiEvent::ListDown),
                _ => None,
            }
        }
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}
