//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    FinishWorkout,
    Dismiss,
    Pause,
    Resume,
    ToggleLogs,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char('f') => KeyAction::FinishWorkout,
        KeyCode::Char('x') | KeyCode::Enter => KeyAction::Dismiss,
        KeyCode::Char('p') => KeyAction::Pause,
        KeyCode::Char('r') => KeyAction::Resume,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}
