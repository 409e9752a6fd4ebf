//! Round-deciding checks over a raw cell array.
//!
//! Free functions rather than `Board` methods so they run equally well
//! against a live board or a snapshot's cells.

use crate::types::{Cell, Player, BOARD_CELLS, WIN_LINES};

/// First completed triple in [`WIN_LINES`] scan order, with its owner.
///
/// The scan order makes the result deterministic when a single mark completes
/// two lines at once (both diagonals through a corner, or a row plus a
/// column): the earlier entry in the table wins.
pub fn winning_line(cells: &[Cell; BOARD_CELLS]) -> Option<(Player, [usize; 3])> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(player) = cells[a] {
            if cells[b] == Some(player) && cells[c] == Some(player) {
                return Some((player, line));
            }
        }
    }
    None
}

/// `true` when no empty cell remains.
pub fn is_full(cells: &[Cell; BOARD_CELLS]) -> bool {
    cells.iter().all(|cell| cell.is_some())
}
