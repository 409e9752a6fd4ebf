//! Cross-round win tallies.

use crate::types::Player;

/// Rounds won per player since launch.
///
/// The tally only ever grows: `GameState::restart` clears the board but
/// leaves the scores alone, and a drawn round credits nobody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Credit one finished round to `player`.
    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }
}
