use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use common::games::tictactoe::{Board, Mark, Player, Position, minimax};

fn create_mid_game_board() -> Board {
    let mut board = Board::new(4);
    let moves = [
        (1, 1, Mark::Human),
        (2, 2, Mark::Computer),
        (0, 3, Mark::Human),
        (3, 0, Mark::Computer),
    ];
    for (row, col, mark) in moves {
        board.set(Position::new(row, col), mark);
    }
    board
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("medium_empty_3x3", |b| {
        let mut board = Board::new(3);
        b.iter(|| minimax(black_box(&mut board), Player::Computer, 2))
    });

    group.bench_function("hard_empty_3x3", |b| {
        let mut board = Board::new(3);
        b.iter(|| minimax(black_box(&mut board), Player::Computer, 4))
    });

    group.bench_function("hard_mid_game_4x4", |b| {
        let mut board = create_mid_game_board();
        b.iter(|| minimax(black_box(&mut board), Player::Computer, 4))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
