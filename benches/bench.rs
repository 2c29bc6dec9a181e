use criterion::{criterion_group, criterion_main, Criterion};
use puzzle_solver::puzzle::board::Board;
use puzzle_solver::puzzle::heuristics::Heuristic;
use puzzle_solver::puzzle::search::{SearchEngine, SearchMethod};
use std::hint::black_box;

/// A deterministic scrambled board for repeatable measurements.
fn scrambled(dim: usize, steps: usize, seed: u64) -> Board {
    fastrand::seed(seed);
    let mut board = Board::goal(dim);
    board.scramble(steps);
    board
}

fn bench_methods(c: &mut Criterion) {
    let board = scrambled(3, 14, 0xBAD5EED);

    c.bench_function("bfs 3x3 scramble-14", |b| {
        b.iter(|| {
            let mut engine = SearchEngine::new(SearchMethod::Bfs);
            black_box(engine.solve(black_box(&board)))
        });
    });

    c.bench_function("astar manhattan 3x3 scramble-14", |b| {
        b.iter(|| {
            let mut engine =
                SearchEngine::with_heuristic(SearchMethod::AStar, Heuristic::Manhattan);
            black_box(engine.solve(black_box(&board)))
        });
    });

    c.bench_function("astar misplaced 3x3 scramble-14", |b| {
        b.iter(|| {
            let mut engine =
                SearchEngine::with_heuristic(SearchMethod::AStar, Heuristic::Misplaced);
            black_box(engine.solve(black_box(&board)))
        });
    });

    // DFS wanders; keep it on the 12-state 2x2 graph.
    let small = scrambled(2, 6, 0xBAD5EED);
    c.bench_function("dfs 2x2 scramble-6", |b| {
        b.iter(|| {
            let mut engine = SearchEngine::new(SearchMethod::Dfs);
            black_box(engine.solve(black_box(&small)))
        });
    });
}

fn bench_board_ops(c: &mut Criterion) {
    let board = scrambled(4, 40, 42);

    c.bench_function("neighbors 4x4", |b| {
        b.iter(|| black_box(black_box(&board).neighbors()));
    });

    c.bench_function("key 4x4", |b| {
        b.iter(|| black_box(black_box(&board).key()));
    });

    c.bench_function("inversions 4x4", |b| {
        b.iter(|| black_box(Board::count_inversions(black_box(board.tiles()))));
    });
}

criterion_group!(benches, bench_methods, bench_board_ops);
criterion_main!(benches);
