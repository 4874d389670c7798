//! Key and mouse mapping from terminal events to landing actions.

use crate::types::LandingAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to landing actions. Quit keys are included so the
/// host can route everything through one match.
pub fn handle_key_event(key: KeyEvent) -> Option<LandingAction> {
    if should_quit(key) {
        return Some(LandingAction::Quit);
    }
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::BackTab => {
            Some(LandingAction::SelectPrev)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Tab => {
            Some(LandingAction::SelectNext)
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(LandingAction::Confirm),

        _ => None,
    }
}

/// Check if key should leave the landing screen without a choice.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Cell position of a left-button press, if `event` is one.
pub fn left_click(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}
