//! Terminal rendering for tic-tac-toe.
//!
//! A small game-oriented rendering layer: the view draws into a plain
//! framebuffer and a diffing backend flushes it to the terminal.
//!
//! Goals:
//! - Keep `core` free of any terminal concern
//! - Keep the view pure so layout is testable without a tty
//! - Send the terminal only what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
