//! Benchmarks for the tiling solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use polycover::geometry::all_orientations;
use polycover::pieces::{shapes_of, PENTOMINOES};
use polycover::placement::enumerate_placements;
use polycover::symmetry::canonical_form;
use polycover::{Board, Puzzle, SolveOptions};

fn domino_ring_puzzle() -> Puzzle {
    let domino = vec![(0, 0), (1, 0)];
    Puzzle::new(
        vec![domino.clone(), domino.clone(), domino.clone(), domino],
        Board::with_holes(3, 3, &[(1, 1)]),
    )
}

/// Benchmark the full search on a small ring puzzle.
fn bench_solve_ring(c: &mut Criterion) {
    let puzzle = domino_ring_puzzle();
    c.bench_function("solve_domino_ring", |b| {
        b.iter(|| black_box(&puzzle).solve(&SolveOptions::default()))
    });
}

/// Benchmark finding the first pentomino solution on the 6x10 board.
fn bench_pentominoes_first_solution(c: &mut Criterion) {
    let puzzle = Puzzle::new(shapes_of(PENTOMINOES), Board::new(10, 6));
    let options = SolveOptions {
        max_solutions: Some(1),
        ..SolveOptions::default()
    };

    let mut group = c.benchmark_group("pentominoes");
    group.sample_size(10);
    group.bench_function("first_solution", |b| {
        b.iter(|| black_box(&puzzle).solve(&options))
    });
    group.finish();
}

/// Benchmark computing all orientations for a single piece.
fn bench_orientations(c: &mut Criterion) {
    let piece = PENTOMINOES[0];

    c.bench_function("all_orientations", |b| {
        b.iter(|| all_orientations(black_box(piece)))
    });
}

/// Benchmark placement enumeration for the pentomino set.
fn bench_enumerate_placements(c: &mut Criterion) {
    let board = Board::new(10, 6);
    let pieces = shapes_of(PENTOMINOES);

    c.bench_function("enumerate_placements", |b| {
        b.iter(|| enumerate_placements(black_box(&pieces), black_box(&board)))
    });
}

/// Benchmark computing the canonical token for a solved board.
fn bench_canonical_form(c: &mut Criterion) {
    let puzzle = domino_ring_puzzle();
    let report = puzzle.solve(&SolveOptions {
        max_solutions: Some(1),
        ..SolveOptions::default()
    });
    let board = puzzle.board();
    let grid = board.solution_grid(&report.placements, &report.solutions[0]);

    c.bench_function("canonical_form", |b| {
        b.iter(|| {
            canonical_form(
                black_box(&grid),
                board.mask(),
                board.width(),
                board.height(),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_solve_ring,
    bench_pentominoes_first_solution,
    bench_orientations,
    bench_enumerate_placements,
    bench_canonical_form
);
criterion_main!(benches);
