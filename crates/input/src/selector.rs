//! Cursor-driven cell selection.

use crate::types::{cell_index, GameAction, BOARD_SIDE};
use crossterm::event::KeyCode;

/// A movable highlight over the grid, for picking cells without the number
/// row.
///
/// Arrow keys, `hjkl`, and `wasd` all move it, wrapping at the edges.
/// `Enter` or space claims the highlighted cell. The selector knows nothing
/// about legality; claiming an occupied cell is refused downstream and the
/// highlight simply stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSelector {
    row: usize,
    col: usize,
}

impl CellSelector {
    /// Starts on the center cell.
    pub fn new() -> Self {
        Self { row: 1, col: 1 }
    }

    /// Flat index of the highlighted cell.
    pub fn cursor(&self) -> usize {
        cell_index(self.row, self.col)
    }

    /// Feed one key code. Movement keys shift the highlight and yield
    /// nothing; `Enter` and space yield a placement at the current position.
    pub fn handle_key(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
                self.step(-1, 0);
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
                self.step(1, 0);
                None
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
                self.step(0, -1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
                self.step(0, 1);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Place(self.cursor())),
            _ => None,
        }
    }

    fn step(&mut self, d_row: isize, d_col: isize) {
        let side = BOARD_SIDE as isize;
        self.row = (self.row as isize + d_row).rem_euclid(side) as usize;
        self.col = (self.col as isize + d_col).rem_euclid(side) as usize;
    }
}

impl Default for CellSelector {
    fn default() -> Self {
        Self::new()
    }
}
