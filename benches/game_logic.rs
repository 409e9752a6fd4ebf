use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{winning_line, GameState};
use tui_tictactoe::types::{Cell, Player, BOARD_CELLS};

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("round_top_row_win", |b| {
        b.iter(|| {
            let mut game = GameState::new();
            for &cell in &[0usize, 4, 1, 5, 2] {
                game.apply_move(black_box(cell));
            }
            game.status()
        })
    });
}

fn bench_drawn_round(c: &mut Criterion) {
    c.bench_function("round_drawn", |b| {
        b.iter(|| {
            let mut game = GameState::new();
            for &cell in &[0usize, 4, 8, 5, 3, 6, 2, 1, 7] {
                game.apply_move(black_box(cell));
            }
            game.status()
        })
    });
}

fn bench_rejected_move(c: &mut Criterion) {
    let mut game = GameState::new();
    game.apply_move(4);

    c.bench_function("apply_move_occupied", |b| {
        b.iter(|| game.apply_move(black_box(4)))
    });
}

fn bench_win_scan(c: &mut Criterion) {
    // Drawn position: the scan walks all eight lines and finds nothing.
    let mut cells: [Cell; BOARD_CELLS] = [None; BOARD_CELLS];
    for (ix, slot) in cells.iter_mut().enumerate() {
        *slot = Some(if [0, 2, 3, 7, 8].contains(&ix) {
            Player::X
        } else {
            Player::O
        });
    }

    c.bench_function("winning_line_full_scan", |b| {
        b.iter(|| winning_line(black_box(&cells)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameState::new();
    for &cell in &[0usize, 4, 1] {
        game.apply_move(cell);
    }

    c.bench_function("snapshot", |b| b.iter(|| black_box(game.snapshot())));
}

criterion_group!(
    benches,
    bench_full_round,
    bench_drawn_round,
    bench_rejected_move,
    bench_win_scan,
    bench_snapshot
);
criterion_main!(benches);
