//! Stateless key-to-action mapping.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game action, if it is one.
///
/// Digits `1`-`9` claim cells directly, numbered left to right and top to
/// bottom to match the hints drawn in empty cells. `r` starts the next
/// round. Cursor movement lives in [`CellSelector`](crate::CellSelector),
/// not here.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(ch @ '1'..='9') => Some(GameAction::Place(ch as usize - '1' as usize)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// `true` for any quit chord: `q`, `Esc`, or ctrl-c.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
