//! Fixed 3x3 grid storage with bounds-checked access.

use arrayvec::ArrayVec;
use crate::types::{Cell, Player, BOARD_CELLS};

/// The raw grid: nine cells, no rules.
///
/// `Board` guards structural validity only (in-bounds indices, one mark per
/// cell). Whose turn it is and when a round ends is `GameState`'s business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Cell contents, or `None` if `cell` is out of range.
    pub fn get(&self, cell: usize) -> Option<Cell> {
        self.cells.get(cell).copied()
    }

    /// Overwrite a cell unconditionally. Returns `false` if `cell` is out of
    /// range, in which case nothing changes.
    pub fn set(&mut self, cell: usize, value: Cell) -> bool {
        match self.cells.get_mut(cell) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// `true` when `cell` is on the board and unclaimed.
    pub fn is_free(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(None))
    }

    /// `true` once every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Claim a free cell for `player`. Refuses out-of-range and occupied
    /// cells, returning `false` with the board untouched.
    pub fn mark(&mut self, cell: usize, player: Player) -> bool {
        if !self.is_free(cell) {
            return false;
        }
        self.cells[cell] = Some(player);
        true
    }

    /// Remove every mark.
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_CELLS];
    }

    /// Number of marks currently on the board.
    pub fn marks(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// The whole grid in row-major order.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Indices of unclaimed cells, in row-major order.
    pub fn free_cells(&self) -> ArrayVec<usize, BOARD_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(ix, cell)| cell.is_none().then_some(ix))
            .collect()
    }

    /// Build a board from a nine-character sketch: `X`, `O`, or `.` per cell
    /// in row-major order.
    #[cfg(test)]
    pub fn from_marks(sketch: &str) -> Self {
        assert_eq!(sketch.len(), BOARD_CELLS);
        let mut board = Self::new();
        for (ix, ch) in sketch.chars().enumerate() {
            let value = match ch {
                'X' => Some(Player::X),
                'O' => Some(Player::O),
                '.' => None,
                other => panic!("unexpected sketch char {other:?}"),
            };
            board.set(ix, value);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
