//! Shared vocabulary for the tic-tac-toe workspace.
//!
//! Everything in this crate is `Copy`, allocation free, and carries no game
//! logic. The rules live in `tui-tictactoe-core`; the crates above it only
//! need a common language for players, cells, and move outcomes.
//!
//! Cells are addressed by a flat index in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

/// Cells per side of the (square) board.
pub const BOARD_SIDE: usize = 3;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Flat index of the cell at `row`, `col` (both zero-based, top-left origin).
///
/// ```
/// use tui_tictactoe_types::cell_index;
///
/// assert_eq!(cell_index(0, 0), 0);
/// assert_eq!(cell_index(1, 1), 4);
/// assert_eq!(cell_index(2, 0), 6);
/// ```
pub const fn cell_index(row: usize, col: usize) -> usize {
    row * BOARD_SIDE + col
}

/// Every cell triple that decides a round, in scan order.
///
/// The ordering is part of the contract: win detection reports the first
/// completed triple in this order, so a move that completes two lines at
/// once always resolves the same way.
///
/// | Block     | Lines                           |
/// | --------- | ------------------------------- |
/// | Rows      | `[0,1,2]`, `[3,4,5]`, `[6,7,8]` |
/// | Columns   | `[0,3,6]`, `[1,4,7]`, `[2,5,8]` |
/// | Diagonals | `[0,4,8]`, `[2,4,6]`            |
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One of the two players. `X` always opens a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player.
    ///
    /// ```
    /// use tui_tictactoe_types::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-letter display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// Contents of one board cell. `None` is an empty cell.
pub type Cell = Option<Player>;

/// Where a round stands.
///
/// `Won` carries the completed triple so a renderer can highlight it without
/// re-deriving anything from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Moves are still being accepted.
    InProgress,
    /// Somebody completed a line. The round is over.
    Won { winner: Player, line: [usize; 3] },
    /// The board filled up with no line completed. The round is over.
    Drawn,
}

impl RoundStatus {
    /// `true` once the round no longer accepts moves.
    ///
    /// ```
    /// use tui_tictactoe_types::RoundStatus;
    ///
    /// assert!(!RoundStatus::InProgress.is_terminal());
    /// assert!(RoundStatus::Drawn.is_terminal());
    /// ```
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// What a single placement attempt did to the game.
///
/// `Rejected` is the quiet failure mode: the move touched an occupied cell,
/// an out-of-range index, or a finished round, and nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was refused and no state changed.
    Rejected,
    /// The mark landed and play passes to `next_player`.
    Continued { next_player: Player },
    /// The mark landed and completed `line`, ending the round.
    Won { winner: Player, line: [usize; 3] },
    /// The mark landed on the last free cell with no line completed.
    Drawn,
}

impl MoveOutcome {
    /// `true` when the mark actually landed on the board.
    ///
    /// ```
    /// use tui_tictactoe_types::{MoveOutcome, Player};
    ///
    /// assert!(MoveOutcome::Drawn.is_accepted());
    /// assert!(MoveOutcome::Continued { next_player: Player::O }.is_accepted());
    /// assert!(!MoveOutcome::Rejected.is_accepted());
    /// ```
    pub fn is_accepted(self) -> bool {
        !matches!(self, MoveOutcome::Rejected)
    }
}

/// Player intents after input mapping, before rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Try to claim the cell at this flat index.
    Place(usize),
    /// Clear the board for a fresh round, keeping the score.
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        for player in [Player::X, Player::O] {
            assert_eq!(player.opponent().opponent(), player);
            assert_ne!(player.opponent(), player);
        }
    }

    #[test]
    fn cell_index_covers_the_board_once() {
        let mut seen = [false; BOARD_CELLS];
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                let ix = cell_index(row, col);
                assert!(ix < BOARD_CELLS);
                assert!(!seen[ix]);
                seen[ix] = true;
            }
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn win_lines_are_in_bounds_and_distinct() {
        for line in WIN_LINES {
            assert!(line.iter().all(|&ix| ix < BOARD_CELLS));
            assert_ne!(line[0], line[1]);
            assert_ne!(line[1], line[2]);
            assert_ne!(line[0], line[2]);
        }
    }

    #[test]
    fn line_membership_matches_the_grid() {
        // Center sits on 4 lines, corners on 3, edge midpoints on 2.
        let lines_through = |ix: usize| WIN_LINES.iter().filter(|l| l.contains(&ix)).count();
        assert_eq!(lines_through(4), 4);
        for corner in [0, 2, 6, 8] {
            assert_eq!(lines_through(corner), 3);
        }
        for edge in [1, 3, 5, 7] {
            assert_eq!(lines_through(edge), 2);
        }
    }

    #[test]
    fn scan_order_starts_with_the_top_row() {
        assert_eq!(WIN_LINES[0], [0, 1, 2]);
        assert_eq!(WIN_LINES[7], [2, 4, 6]);
    }
}
