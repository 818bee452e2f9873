//! Key mapping from terminal events to donut actions.

use crate::types::DonutAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a runtime action. Releases and repeats are ignored.
pub fn map_key(key: KeyEvent) -> Option<DonutAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(DonutAction::Quit);
    }
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Tab => Some(DonutAction::CycleCharset),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(DonutAction::ToggleColor),
        _ => None,
    }
}

/// Check if key should stop the animation.
///
/// Raw mode swallows SIGINT, so Ctrl+C arrives here as a key.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
