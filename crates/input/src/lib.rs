//! Input handling for terminal play.
//!
//! Two layers, both free of game logic:
//!
//! - [`map`]: stateless key-to-action mapping (number row, restart, quit
//!   chords)
//! - [`selector`]: the movable cell highlight for arrow-key play
//!
//! The runner asks [`map::handle_key_event`] first and falls back to the
//! selector, so the number row always wins over movement aliases.
//!
//! ```
//! use crossterm::event::KeyCode;
//! use tui_tictactoe_input::CellSelector;
//! use tui_tictactoe_types::GameAction;
//!
//! let mut selector = CellSelector::new();
//! selector.handle_key(KeyCode::Up);
//! assert_eq!(selector.handle_key(KeyCode::Enter), Some(GameAction::Place(1)));
//! ```

pub mod map;
pub mod selector;

pub use tui_tictactoe_types as types;

pub use map::{handle_key_event, should_quit};
pub use selector::CellSelector;
