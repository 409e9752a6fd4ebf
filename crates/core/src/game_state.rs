//! The authoritative state machine: board, turn, round status, scores.

use crate::board::Board;
use crate::rules;
use crate::score::ScoreBoard;
use crate::snapshot::GameSnapshot;
use crate::types::{MoveOutcome, Player, RoundStatus};

/// Owns the whole game and funnels every mutation through [`apply_move`]
/// and [`restart`].
///
/// A refused move is a strict no-op: board, turn, status, and scores all
/// stay exactly as they were.
///
/// [`apply_move`]: GameState::apply_move
/// [`restart`]: GameState::restart
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: RoundStatus,
    scores: ScoreBoard,
}

impl GameState {
    /// Fresh game: empty board, `X` to open, scores at zero.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: RoundStatus::InProgress,
            scores: ScoreBoard::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose mark the next accepted move places.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    /// `true` while the current round accepts moves.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Try to claim `cell` for the player to move.
    ///
    /// Refusals return [`MoveOutcome::Rejected`]: the round is already over,
    /// `cell` is out of range, or the cell is taken. An accepted mark either
    /// passes the turn, wins the round (crediting the scoreboard), or draws
    /// it when the last cell fills with no line complete.
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        if !self.is_active() {
            return MoveOutcome::Rejected;
        }
        let mover = self.current_player;
        if !self.board.mark(cell, mover) {
            return MoveOutcome::Rejected;
        }
        // The board had no completed line before this mark, so any line found
        // now was completed by the mover.
        if let Some((winner, line)) = rules::winning_line(self.board.cells()) {
            self.status = RoundStatus::Won { winner, line };
            self.scores.record_win(winner);
            return MoveOutcome::Won { winner, line };
        }
        if self.board.is_full() {
            self.status = RoundStatus::Drawn;
            return MoveOutcome::Drawn;
        }
        self.current_player = mover.opponent();
        MoveOutcome::Continued {
            next_player: self.current_player,
        }
    }

    /// Start the next round: clear the board, hand the opening move to `X`,
    /// forget the old round's status. Scores carry over.
    pub fn restart(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.status = RoundStatus::InProgress;
    }

    /// Detached copy of the current state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: *self.board.cells(),
            to_move: self.current_player,
            status: self.status,
            scores: self.scores,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut GameState, moves: &[usize]) -> MoveOutcome {
        let mut last = MoveOutcome::Rejected;
        for &cell in moves {
            last = game.apply_move(cell);
        }
        last
    }

    #[test]
    fn test_x_opens_and_turns_alternate() {
        let mut game = GameState::new();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(
            game.apply_move(0),
            MoveOutcome::Continued {
                next_player: Player::O
            }
        );
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(
            game.apply_move(1),
            MoveOutcome::Continued {
                next_player: Player::X
            }
        );
        assert_eq!(game.board().get(0), Some(Some(Player::X)));
        assert_eq!(game.board().get(1), Some(Some(Player::O)));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = GameState::new();
        game.apply_move(4);
        let before = game.clone();
        assert_eq!(game.apply_move(4), MoveOutcome::Rejected);
        assert_eq!(game.snapshot(), before.snapshot());
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = GameState::new();
        let before = game.clone();
        assert_eq!(game.apply_move(9), MoveOutcome::Rejected);
        assert_eq!(game.apply_move(usize::MAX), MoveOutcome::Rejected);
        assert_eq!(game.snapshot(), before.snapshot());
    }

    #[test]
    fn test_row_win_scores() {
        let mut game = GameState::new();
        let outcome = play(&mut game, &[0, 4, 1, 5, 2]);
        assert_eq!(
            outcome,
            MoveOutcome::Won {
                winner: Player::X,
                line: [0, 1, 2]
            }
        );
        assert_eq!(
            game.status(),
            RoundStatus::Won {
                winner: Player::X,
                line: [0, 1, 2]
            }
        );
        assert!(!game.is_active());
        assert_eq!(game.scores().wins(Player::X), 1);
        assert_eq!(game.scores().wins(Player::O), 0);
    }

    #[test]
    fn test_moves_after_round_end_rejected() {
        let mut game = GameState::new();
        play(&mut game, &[0, 4, 1, 5, 2]);
        let before = game.snapshot();
        assert_eq!(game.apply_move(8), MoveOutcome::Rejected);
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.scores().wins(Player::X), 1);
    }

    #[test]
    fn test_full_board_draw() {
        let mut game = GameState::new();
        let outcome = play(&mut game, &[0, 4, 8, 5, 3, 6, 2, 1, 7]);
        assert_eq!(outcome, MoveOutcome::Drawn);
        assert_eq!(game.status(), RoundStatus::Drawn);
        assert_eq!(game.scores().wins(Player::X), 0);
        assert_eq!(game.scores().wins(Player::O), 0);
    }

    #[test]
    fn test_win_on_final_cell() {
        // X's last mark fills the board and completes the top row at once.
        let mut game = GameState::new();
        let outcome = play(&mut game, &[0, 3, 1, 6, 5, 7, 8, 4, 2]);
        assert!(matches!(
            outcome,
            MoveOutcome::Won {
                winner: Player::X,
                ..
            }
        ));
        assert!(game.board().is_full());
    }

    #[test]
    fn test_restart_keeps_score() {
        let mut game = GameState::new();
        play(&mut game, &[0, 4, 1, 5, 2]);
        game.restart();
        assert_eq!(game.board().marks(), 0);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), RoundStatus::InProgress);
        assert_eq!(game.scores().wins(Player::X), 1);
    }

    #[test]
    fn test_restart_mid_round_unscored() {
        let mut game = GameState::new();
        play(&mut game, &[0, 4, 1]);
        game.restart();
        assert_eq!(game.board().marks(), 0);
        assert_eq!(game.scores().wins(Player::X), 0);
        assert_eq!(game.scores().wins(Player::O), 0);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut game = GameState::new();
        play(&mut game, &[4, 0]);
        let snap = game.snapshot();
        assert_eq!(snap.cells, *game.board().cells());
        assert_eq!(snap.to_move, game.current_player());
        assert_eq!(snap.status, game.status());
        assert_eq!(snap.scores, game.scores());
    }
}
