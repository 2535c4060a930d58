use crate::app::AppState;
use crossterm::event::{self, KeyEvent, KeyModifiers};

/// Handle keyboard events for the main settings list
pub fn handle_main_view(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        event::KeyCode::Char('q') => return true,
        event::KeyCode::Down | event::KeyCode::Char('j') => state.next(),
        event::KeyCode::Up | event::KeyCode::Char('k') => state.previous(),
        event::KeyCode::Enter | event::KeyCode::Char(' ') => state.activate_selected(),
        event::KeyCode::Char('a') => state.open_advanced(),
        _ => {}
    }
    false
}

/// Handle keyboard events for the advanced settings panel
pub fn handle_advanced_view(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        event::KeyCode::Char('q') => return true,
        event::KeyCode::Esc
        | event::KeyCode::Backspace
        | event::KeyCode::Left
        | event::KeyCode::Char('h') => state.close_advanced(),
        event::KeyCode::Char('[') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Close like Esc
            state.close_advanced();
        }
        event::KeyCode::Char('r') => state.refresh_panel(),
        _ => {}
    }
    false
}
