use criterion::{Criterion, criterion_group, criterion_main};
use gomoku_core::games::gomoku::{Board, BotInput, Side, calculate_move};
use std::hint::black_box;

fn play_30_moves() {
    let mut board = Board::new();
    let mut side = Side::Black;

    for _ in 0..30 {
        let input = BotInput {
            board: board.clone(),
            side,
        };

        match calculate_move(input) {
            Some(pos) => {
                board.place(pos.row, pos.col, side).unwrap();
                side = side.opponent();
            }
            None => break,
        }
    }
}

fn mid_game_board() -> Board {
    let mut board = Board::new();
    let moves = [
        (7, 7, Side::Black), (7, 8, Side::White), (8, 7, Side::Black), (8, 8, Side::White),
        (6, 6, Side::Black), (9, 9, Side::White), (5, 5, Side::Black), (10, 10, Side::White),
        (8, 6, Side::Black), (6, 8, Side::White), (7, 9, Side::Black), (9, 7, Side::White),
        (6, 10, Side::Black), (10, 6, Side::White), (7, 5, Side::Black), (5, 7, Side::White),
        (8, 4, Side::Black), (4, 8, Side::White), (9, 3, Side::Black), (3, 9, Side::White),
    ];
    for (row, col, side) in moves {
        board.place(row, col, side).unwrap();
    }
    board
}

fn selector_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector");

    group.bench_function("30_moves", |b| b.iter(play_30_moves));

    group.bench_function("single_move_empty", |b| {
        let board = Board::new();
        b.iter(|| {
            calculate_move(BotInput {
                board: black_box(board.clone()),
                side: Side::Black,
            })
        })
    });

    group.bench_function("single_move_mid_game", |b| {
        let board = mid_game_board();
        b.iter(|| {
            calculate_move(BotInput {
                board: black_box(board.clone()),
                side: Side::Black,
            })
        })
    });

    group.finish();
}

criterion_group!(benches, selector_bench);
criterion_main!(benches);
