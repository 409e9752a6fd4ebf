//! Read-only view of a game instant.

use crate::score::ScoreBoard;
use crate::types::{Cell, Player, RoundStatus, BOARD_CELLS};

/// Everything a renderer needs, detached from the live `GameState`.
///
/// Plain `Copy` data. Taking one is a nine-cell memcpy and holds no borrow,
/// so a frame can be drawn from it while the game keeps taking moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// The grid in row-major order.
    pub cells: [Cell; BOARD_CELLS],
    /// Who places next. Meaningless once `status` is terminal.
    pub to_move: Player,
    /// Where the round stands, including the winning line if any.
    pub status: RoundStatus,
    /// Win tallies carried across rounds.
    pub scores: ScoreBoard,
}

impl GameSnapshot {
    /// `true` while the round still accepts moves.
    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }

    /// `true` if `cell` lies on the completed line of a won round.
    pub fn winning_cell(&self, cell: usize) -> bool {
        matches!(self.status, RoundStatus::Won { line, .. } if line.contains(&cell))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
            to_move: Player::X,
            status: RoundStatus::InProgress,
            scores: ScoreBoard::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fresh_round() {
        let snap = GameSnapshot::default();
        assert!(snap.playable());
        assert_eq!(snap.to_move, Player::X);
        assert!(snap.cells.iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn test_winning_cell_follows_status() {
        let mut snap = GameSnapshot::default();
        assert!(!snap.winning_cell(0));
        snap.status = RoundStatus::Won {
            winner: Player::O,
            line: [2, 4, 6],
        };
        assert!(!snap.playable());
        assert!(snap.winning_cell(4));
        assert!(!snap.winning_cell(8));
    }
}
