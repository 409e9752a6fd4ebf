//! Terminal tic-tac-toe runner (default binary).
//!
//! Two local players share one keyboard. Nothing in the game is time driven,
//! so the loop blocks on input and redraws once per event.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tictactoe::core::GameState;
use tui_tictactoe::input::{handle_key_event, should_quit, CellSelector};
use tui_tictactoe::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_tictactoe::types::GameAction;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let view = GameView::default();
    let mut selector = CellSelector::new();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = game.snapshot();
        // No selector highlight once the round is over; only `r` and `q`
        // matter then.
        let cursor = snap.playable().then(|| selector.cursor());
        view.render_into(&snap, cursor, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                // Number row and restart first, then the movable selector.
                let action = handle_key_event(key).or_else(|| selector.handle_key(key.code));
                match action {
                    Some(GameAction::Place(cell)) => {
                        game.apply_move(cell);
                    }
                    Some(GameAction::Restart) => game.restart(),
                    None => {}
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
