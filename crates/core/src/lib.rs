//! Game rules and state for terminal tic-tac-toe.
//!
//! The crate splits along the data flow:
//!
//! - [`board`]: the raw 3x3 grid with bounds-checked access
//! - [`rules`]: win and draw checks over a cell array
//! - [`score`]: cross-round win tallies
//! - [`game_state`]: the state machine tying the pieces together
//! - [`snapshot`]: the `Copy` view handed to renderers
//!
//! ```
//! use tui_tictactoe_core::GameState;
//! use tui_tictactoe_types::{MoveOutcome, Player};
//!
//! let mut game = GameState::new();
//! assert_eq!(
//!     game.apply_move(4),
//!     MoveOutcome::Continued { next_player: Player::O }
//! );
//! // Same cell again: refused, nothing changes.
//! assert_eq!(game.apply_move(4), MoveOutcome::Rejected);
//! assert_eq!(game.current_player(), Player::O);
//! ```

pub mod board;
pub mod game_state;
pub mod rules;
pub mod score;
pub mod snapshot;

pub use tui_tictactoe_types as types;

pub use board::Board;
pub use game_state::GameState;
pub use rules::{is_full, winning_line};
pub use score::ScoreBoard;
pub use snapshot::GameSnapshot;
