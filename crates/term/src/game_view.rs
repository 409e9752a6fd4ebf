//! GameView: maps a game snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O), so layout and styling can be unit-tested
//! by inspecting the buffer.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Player, RoundStatus, BOARD_CELLS, BOARD_SIDE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Block glyphs for marks, drawn when a cell is big enough to hold them.
/// Smaller cells fall back to a single letter.
const MARK_W: u16 = 5;
const MARK_H: u16 = 3;
const X_MARK: [&str; MARK_H as usize] = ["█   █", "  █  ", "█   █"];
const O_MARK: [&str; MARK_H as usize] = [" ███ ", "█   █", " ███ "];

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Interior width of one board cell in terminal columns.
    cell_w: u16,
    /// Interior height of one board cell in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits the block glyphs with a one-column margin.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    fn frame_w(&self) -> u16 {
        BOARD_SIDE as u16 * (self.cell_w + 1) + 1
    }

    fn frame_h(&self) -> u16 {
        BOARD_SIDE as u16 * (self.cell_h + 1) + 1
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path; callers reuse one buffer across
    /// frames. `cursor` is the selector's highlight and only shows while the
    /// round is playable.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame_w = self.frame_w();
        let frame_h = self.frame_h();
        // Vertical layout: status line, blank, grid, blank, key help.
        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h + 4) / 2;
        let frame_y = top.saturating_add(2);

        self.draw_status(fb, snap, frame_x, top, frame_w);
        self.draw_grid(fb, frame_x, frame_y);
        for ix in 0..BOARD_CELLS {
            self.draw_cell(fb, snap, cursor, frame_x, frame_y, ix);
        }
        self.draw_score_panel(fb, snap, viewport, frame_x, frame_y, frame_w);
        self.draw_help(fb, viewport, frame_y.saturating_add(frame_h).saturating_add(1));
    }

    /// Convenience helper that allocates a fresh framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16, w: u16) {
        let (head, mark, tail) = match snap.status {
            RoundStatus::InProgress => ("Player ", Some(snap.to_move), "'s turn"),
            RoundStatus::Won { winner, .. } => ("Player ", Some(winner), " wins!"),
            RoundStatus::Drawn => ("It's a draw!", None, ""),
        };
        let base = CellStyle {
            bold: snap.status.is_terminal(),
            ..CellStyle::default()
        };
        let len = (head.len() + usize::from(mark.is_some()) + tail.len()) as u16;
        let mut cx = x.saturating_add(w.saturating_sub(len) / 2);
        fb.put_str(cx, y, head, base);
        cx = cx.saturating_add(head.len() as u16);
        if let Some(player) = mark {
            let colored = CellStyle {
                fg: player_color(player),
                ..base
            };
            fb.put_str(cx, y, player.as_str(), colored);
            cx = cx.saturating_add(1);
        }
        fb.put_str(cx, y, tail, base);
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(110, 104, 98),
            ..CellStyle::default()
        };
        let step_x = self.cell_w + 1;
        let step_y = self.cell_h + 1;
        let xs = [x, x + step_x, x + 2 * step_x, x + 3 * step_x];
        let ys = [y, y + step_y, y + 2 * step_y, y + 3 * step_y];

        for &gy in &ys {
            for gx in x..=xs[3] {
                fb.put_char(gx, gy, '─', style);
            }
        }
        for &gx in &xs {
            for gy in y..=ys[3] {
                fb.put_char(gx, gy, '│', style);
            }
        }
        for (yi, &gy) in ys.iter().enumerate() {
            for (xi, &gx) in xs.iter().enumerate() {
                fb.put_char(gx, gy, junction(xi, yi), style);
            }
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        frame_x: u16,
        frame_y: u16,
        ix: usize,
    ) {
        let col = (ix % BOARD_SIDE) as u16;
        let row = (ix / BOARD_SIDE) as u16;
        let px = frame_x + 1 + col * (self.cell_w + 1);
        let py = frame_y + 1 + row * (self.cell_h + 1);

        let won_cell = snap.winning_cell(ix);
        let bg = if snap.playable() && cursor == Some(ix) {
            Rgb::new(52, 48, 45)
        } else if won_cell {
            Rgb::new(62, 44, 32)
        } else {
            Rgb::new(0, 0, 0)
        };
        let blank = CellStyle {
            bg,
            ..CellStyle::default()
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', blank);

        match snap.cells[ix] {
            Some(player) => self.draw_mark(fb, px, py, player, bg, won_cell),
            // Number-row hint, matching the key mapping.
            None if snap.playable() => {
                let hint = CellStyle {
                    fg: Rgb::new(110, 104, 98),
                    bg,
                    bold: false,
                    dim: true,
                };
                let ch = char::from(b'1' + ix as u8);
                fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, ch, hint);
            }
            None => {}
        }
    }

    fn draw_mark(
        &self,
        fb: &mut FrameBuffer,
        px: u16,
        py: u16,
        player: Player,
        bg: Rgb,
        emphasized: bool,
    ) {
        let style = CellStyle {
            fg: player_color(player),
            bg,
            bold: emphasized,
            dim: false,
        };
        if self.cell_w >= MARK_W && self.cell_h >= MARK_H {
            let rows = match player {
                Player::X => &X_MARK,
                Player::O => &O_MARK,
            };
            let ox = px + (self.cell_w - MARK_W) / 2;
            let oy = py + (self.cell_h - MARK_H) / 2;
            for (dy, line) in rows.iter().enumerate() {
                fb.put_str(ox, oy + dy as u16, line, style);
            }
        } else {
            fb.put_char(
                px + self.cell_w / 2,
                py + self.cell_h / 2,
                mark_char(player),
                style,
            );
        }
    }

    fn draw_score_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_x: u16,
        frame_y: u16,
        frame_w: u16,
    ) {
        let panel_x = frame_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let just_won = match snap.status {
            RoundStatus::Won { winner, .. } => Some(winner),
            _ => None,
        };

        fb.put_str(panel_x, frame_y, "SCORE", label);
        let mut y = frame_y.saturating_add(2);
        for player in [Player::X, Player::O] {
            let row = CellStyle {
                fg: player_color(player),
                bold: just_won == Some(player),
                ..CellStyle::default()
            };
            fb.put_str(panel_x, y, player.as_str(), row);
            fb.put_u32(panel_x + 2, y, snap.scores.wins(player), row);
            y = y.saturating_add(2);
        }
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport, y: u16) {
        let text = "1-9 or arrows+enter: place  r: restart  q: quit";
        let style = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        let x = viewport.width.saturating_sub(text.len() as u16) / 2;
        fb.put_str(x, y, text, style);
    }
}

fn junction(xi: usize, yi: usize) -> char {
    match (xi, yi) {
        (0, 0) => '┌',
        (3, 0) => '┐',
        (0, 3) => '└',
        (3, 3) => '┘',
        (_, 0) => '┬',
        (_, 3) => '┴',
        (0, _) => '├',
        (3, _) => '┤',
        _ => '┼',
    }
}

fn player_color(player: Player) -> Rgb {
    match player {
        Player::X => Rgb::new(218, 119, 86),
        Player::O => Rgb::new(122, 162, 247),
    }
}

fn mark_char(player: Player) -> char {
    match player {
        Player::X => 'X',
        Player::O => 'O',
    }
}
