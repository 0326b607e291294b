//! Polyomino Tiling Solver Library
//!
//! Solves exact-cover tiling puzzles: place every piece of a polyomino set
//! exactly once on a rectangular board (optionally with holes) so that
//! every usable cell is covered exactly once. Placements become rows of a
//! sparse constraint matrix searched with Dancing Links; solutions stream
//! out as row-id sequences and can be deduplicated under the board's
//! symmetry group.

pub mod board;
pub mod dlx;
pub mod geometry;
pub mod persistence;
pub mod pieces;
pub mod placement;
pub mod progress;
pub mod symmetry;

use std::time::Duration;

pub use board::Board;
pub use dlx::HeuristicMode;
pub use progress::ProgressSnapshot;

use dlx::Dlx;
use pieces::Shape;
use placement::{enumerate_placements, Placement};
use progress::ProgressReporter;
use symmetry::SeenSolutions;

/// Search policies for one solve run.
#[derive(Clone, Copy, Debug)]
pub struct SolveOptions {
    /// Stop after this many reported solutions; `None` is exhaustive.
    pub max_solutions: Option<usize>,
    /// Report only the first solution of each symmetry class.
    pub unique: bool,
    pub heuristic: HeuristicMode,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_solutions: None,
            unique: false,
            heuristic: HeuristicMode::LeastFilled,
        }
    }
}

/// Outcome of one solve run.
///
/// Row ids in `solutions` index into `placements`, which is the exact
/// enumeration the matrix was built from.
#[derive(Debug)]
pub struct SolveReport {
    pub solutions: Vec<Vec<usize>>,
    pub placements: Vec<Placement>,
    pub nodes_visited: u64,
    /// Solutions found by the search, before any uniqueness filtering.
    pub raw_solutions: u64,
}

/// A piece set plus the board it must tile.
pub struct Puzzle {
    pieces: Vec<Shape>,
    board: Board,
}

impl Puzzle {
    /// Creates a puzzle definition.
    ///
    /// Panics on an empty piece list, an empty piece shape, or more pieces
    /// than fit in the byte-sized grid encoding.
    pub fn new(pieces: Vec<Shape>, board: Board) -> Self {
        assert!(!pieces.is_empty(), "puzzle needs at least one piece");
        assert!(pieces.len() <= 254, "piece ids must fit in a byte");
        for shape in &pieces {
            assert!(!shape.is_empty(), "piece shape must not be empty");
        }
        Self { pieces, board }
    }

    pub fn pieces(&self) -> &[Shape] {
        &self.pieces
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Enumerates every legal placement; the returned order defines the
    /// row ids used in solutions.
    pub fn placements(&self) -> Vec<Placement> {
        enumerate_placements(&self.pieces, &self.board)
    }

    /// Solves the puzzle under the given options.
    pub fn solve(&self, options: &SolveOptions) -> SolveReport {
        self.run(options, None)
    }

    /// Like [`Puzzle::solve`], with a reporter thread delivering progress
    /// snapshots at `interval` for the duration of the search.
    pub fn solve_with_progress(
        &self,
        options: &SolveOptions,
        interval: Duration,
        report: impl FnMut(ProgressSnapshot) + Send + 'static,
    ) -> SolveReport {
        self.run(options, Some((interval, Box::new(report))))
    }

    fn run(
        &self,
        options: &SolveOptions,
        progress: Option<(Duration, Box<dyn FnMut(ProgressSnapshot) + Send>)>,
    ) -> SolveReport {
        let placements = self.placements();

        let mut engine = Dlx::new();
        engine.setup(&placements, &self.board, self.pieces.len());
        engine.set_heuristic(options.heuristic);
        let control = engine.control();

        let reporter = progress.map(|(interval, report)| {
            ProgressReporter::spawn(engine.control(), interval, report)
        });

        let stopper = engine.control();
        let board = &self.board;
        let mut seen = SeenSolutions::new();
        let mut solutions: Vec<Vec<usize>> = Vec::new();

        engine.search(|rows| {
            if options.unique {
                let grid = board.solution_grid(&placements, rows);
                if !seen.is_new(&grid, board.mask(), board.width(), board.height()) {
                    return;
                }
            }
            solutions.push(rows.to_vec());

            if let Some(max) = options.max_solutions {
                if solutions.len() >= max {
                    stopper.request_stop();
                }
            }
        });

        // the reporter watches the stop flag; raise it so it winds down
        control.request_stop();
        if let Some(reporter) = reporter {
            reporter.join();
        }

        SolveReport {
            solutions,
            placements,
            nodes_visited: control.nodes_visited(),
            raw_solutions: control.solutions_found(),
        }
    }
}
