use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Game, GameSettings};
use blockfall::types::{CellState, PieceKind, Rotation};

fn bench_collision(c: &mut Criterion) {
    let mut board = Board::default();
    for y in 10..20 {
        for x in (y % 2..10).step_by(2) {
            board.set_cell(x, y, CellState::Filled);
        }
    }

    c.bench_function("is_possible_movement", |b| {
        b.iter(|| {
            board.is_possible_movement(
                black_box(3),
                black_box(6),
                black_box(PieceKind::T),
                black_box(Rotation::East),
            )
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("delete_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set_cell(x, y, CellState::Filled);
                }
            }
            black_box(board.delete_possible_lines())
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_until_game_over", |b| {
        b.iter(|| {
            let mut game = Game::new(GameSettings::default());
            while !game.is_over() {
                game.hard_drop();
            }
            black_box(game.pieces_locked())
        })
    });
}

criterion_group!(benches, bench_collision, bench_line_clear, bench_hard_drop);
criterion_main!(benches);
