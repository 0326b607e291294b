//! Dancing Links exact-cover engine.
//!
//! The constraint matrix is a sparse toroidal structure: every node sits in
//! a circular doubly-linked row and a circular doubly-linked column. Links
//! are indices into a growable node arena rather than pointers, so cover
//! and uncover stay O(1) per link without any aliasing hazards.
//!
//! Columns come in two kinds: one per mask-enabled board cell, then one per
//! piece. All columns are primary, so a solution uses every piece exactly
//! once and fills every enabled cell exactly once. The matrix is mutated in
//! place during search and restored to its pre-call state after every
//! backtrack step; a completed search leaves the matrix exactly as built.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::board::Board;
use crate::placement::Placement;

/// Index of the header sentinel in the node arena.
const ROOT: usize = 0;

/// Column-selection heuristic.
///
/// Both modes currently resolve to the same minimum-size rule; the enum
/// survives so `LeastFilled` can grow a different cost function without
/// changing callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeuristicMode {
    #[default]
    None,
    LeastFilled,
}

/// Shared search state: progress counters plus the cooperative stop flag.
///
/// A monitoring thread may read the counters at any time through atomic
/// loads; the stop flag may be set from any thread and is checked at the
/// start of every recursive search call. Counters are monotonically
/// increasing for the lifetime of the engine.
#[derive(Debug, Default)]
pub struct SearchControl {
    nodes_visited: AtomicU64,
    solutions_found: AtomicU64,
    stop: AtomicBool,
}

impl SearchControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited.load(Ordering::Relaxed)
    }

    pub fn solutions_found(&self) -> u64 {
        self.solutions_found.load(Ordering::Relaxed)
    }

    /// Requests cooperative cancellation; the search unwinds via ordinary
    /// returns and solutions already reported remain valid.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// Observer for search progress, plugged into [`Dlx::search_traced`].
///
/// The default methods do nothing, so a tracer only implements the events
/// it cares about.
pub trait SearchTrace {
    /// A column was selected for branching.
    fn column_chosen(&mut self, depth: usize, name: &str, size: usize) {
        let _ = (depth, name, size);
    }

    /// The chosen column had no remaining rows.
    fn dead_end(&mut self, depth: usize) {
        let _ = depth;
    }

    /// A full cover was found; `rows` is the solution row-id sequence.
    fn solution(&mut self, depth: usize, rows: &[usize]) {
        let _ = (depth, rows);
    }
}

/// The no-op tracer used by [`Dlx::search`].
pub struct NoTrace;

impl SearchTrace for NoTrace {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    /// Owning column id; `usize::MAX` for the header sentinel.
    column: usize,
    /// Row id carried by row nodes; `usize::MAX` for header and column heads.
    row: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Column {
    /// Arena index of this column's head node.
    head: usize,
    /// Live row count.
    size: usize,
    name: String,
}

/// The exact-cover matrix and its search state.
pub struct Dlx {
    nodes: Vec<Node>,
    columns: Vec<Column>,
    solution_rows: Vec<usize>,
    heuristic: HeuristicMode,
    control: Arc<SearchControl>,
}

impl Dlx {
    /// Creates an empty matrix holding only the self-linked header.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                left: ROOT,
                right: ROOT,
                up: ROOT,
                down: ROOT,
                column: usize::MAX,
                row: usize::MAX,
            }],
            columns: Vec::new(),
            solution_rows: Vec::new(),
            heuristic: HeuristicMode::None,
            control: Arc::new(SearchControl::new()),
        }
    }

    /// Shared handle to the progress counters and stop flag.
    pub fn control(&self) -> Arc<SearchControl> {
        Arc::clone(&self.control)
    }

    pub fn set_heuristic(&mut self, heuristic: HeuristicMode) {
        self.heuristic = heuristic;
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Appends a new column to the header ring and returns its id.
    pub fn add_column(&mut self, name: impl Into<String>) -> usize {
        let id = self.columns.len();
        let node = self.nodes.len();
        let left = self.nodes[ROOT].left;

        self.nodes.push(Node {
            left,
            right: ROOT,
            up: node,
            down: node,
            column: id,
            row: usize::MAX,
        });
        self.nodes[left].right = node;
        self.nodes[ROOT].left = node;

        self.columns.push(Column {
            head: node,
            size: 0,
            name: name.into(),
        });
        id
    }

    /// Adds a row covering the given columns.
    ///
    /// Each node is spliced to the bottom of its column's list; the row's
    /// nodes are then linked into their own circular ring.
    pub fn add_row(&mut self, row_id: usize, columns: &[usize]) {
        if columns.is_empty() {
            return;
        }

        let first = self.nodes.len();
        for &column in columns {
            let head = self.columns[column].head;
            let node = self.nodes.len();
            let up = self.nodes[head].up;

            self.nodes.push(Node {
                left: node,
                right: node,
                up,
                down: head,
                column,
                row: row_id,
            });
            self.nodes[up].down = node;
            self.nodes[head].up = node;
            self.columns[column].size += 1;
        }

        let count = self.nodes.len() - first;
        for i in 0..count {
            self.nodes[first + i].right = first + (i + 1) % count;
            self.nodes[first + i].left = first + (i + count - 1) % count;
        }
    }

    /// Builds the full matrix for a tiling problem.
    ///
    /// Creates one column per mask-enabled cell in ascending linear-index
    /// order, then one column per piece in ascending piece-id order. Each
    /// placement becomes a row (its index is the row id) covering its cell
    /// columns followed by its piece column. A placement referencing a hole
    /// or an out-of-range cell is silently dropped; the enumerator never
    /// produces one, so this is a boundary check rather than validation.
    pub fn setup(&mut self, placements: &[Placement], board: &Board, num_pieces: usize) {
        let mut cell_to_column: Vec<Option<usize>> = vec![None; board.cells()];
        for cell in 0..board.cells() {
            if board.mask()[cell] {
                cell_to_column[cell] = Some(self.add_column(format!("C{cell}")));
            }
        }

        let piece_columns_start = self.columns.len();
        for piece in 0..num_pieces {
            self.add_column(format!("P{piece}"));
        }

        'rows: for (row_id, placement) in placements.iter().enumerate() {
            let mut row_columns = Vec::with_capacity(placement.cells.len() + 1);
            for &cell in &placement.cells {
                match cell_to_column.get(cell).copied().flatten() {
                    Some(column) => row_columns.push(column),
                    None => continue 'rows,
                }
            }
            row_columns.push(piece_columns_start + placement.piece);
            self.add_row(row_id, &row_columns);
        }
    }

    /// Removes a column from the header ring and every row through it from
    /// all other columns. Storage is untouched, so [`Dlx::uncover`] can
    /// restore every link.
    pub fn cover(&mut self, column: usize) {
        let head = self.columns[column].head;
        let (left, right) = (self.nodes[head].left, self.nodes[head].right);
        self.nodes[right].left = left;
        self.nodes[left].right = right;

        let mut i = self.nodes[head].down;
        while i != head {
            let mut j = self.nodes[i].right;
            while j != i {
                let (up, down) = (self.nodes[j].up, self.nodes[j].down);
                self.nodes[down].up = up;
                self.nodes[up].down = down;
                self.columns[self.nodes[j].column].size -= 1;
                j = self.nodes[j].right;
            }
            i = self.nodes[i].down;
        }
    }

    /// Exact structural inverse of [`Dlx::cover`]: rows bottom-to-top,
    /// nodes right-to-left.
    pub fn uncover(&mut self, column: usize) {
        let head = self.columns[column].head;

        let mut i = self.nodes[head].up;
        while i != head {
            let mut j = self.nodes[i].left;
            while j != i {
                self.columns[self.nodes[j].column].size += 1;
                let (up, down) = (self.nodes[j].up, self.nodes[j].down);
                self.nodes[down].up = j;
                self.nodes[up].down = j;
                j = self.nodes[j].left;
            }
            i = self.nodes[i].up;
        }

        let (left, right) = (self.nodes[head].left, self.nodes[head].right);
        self.nodes[right].left = head;
        self.nodes[left].right = head;
    }

    /// Selects the branching column under the configured heuristic.
    ///
    /// Returns a column no active column strictly undercuts in size; ties
    /// go to the first column encountered from the header. `None` only when
    /// the header ring is empty.
    pub fn choose_column(&self) -> Option<usize> {
        match self.heuristic {
            HeuristicMode::None => self.min_size_column(),
            HeuristicMode::LeastFilled => self.min_size_column(),
        }
    }

    fn min_size_column(&self) -> Option<usize> {
        let mut best = None;
        let mut best_size = usize::MAX;

        let mut node = self.nodes[ROOT].right;
        while node != ROOT {
            let column = self.nodes[node].column;
            let size = self.columns[column].size;
            if size < best_size {
                best_size = size;
                best = Some(column);
                if best_size <= 1 {
                    break;
                }
            }
            node = self.nodes[node].right;
        }
        best
    }

    /// Runs the exhaustive depth-first search.
    ///
    /// `on_solution` is invoked synchronously for every full cover, with
    /// the matrix in its fully-covered transient state; callers must copy
    /// whatever they need before returning, since unwinding mutates the
    /// covering state again immediately afterwards. Setting the stop flag
    /// (including from inside the callback) ends the search cooperatively.
    pub fn search(&mut self, mut on_solution: impl FnMut(&[usize])) {
        self.search_traced(&mut on_solution, &mut NoTrace);
    }

    /// [`Dlx::search`] with a tracing observer.
    pub fn search_traced(
        &mut self,
        on_solution: &mut dyn FnMut(&[usize]),
        trace: &mut dyn SearchTrace,
    ) {
        self.search_inner(0, on_solution, trace);
    }

    fn search_inner(
        &mut self,
        depth: usize,
        on_solution: &mut dyn FnMut(&[usize]),
        trace: &mut dyn SearchTrace,
    ) {
        if self.control.stop_requested() {
            return;
        }

        if self.nodes[ROOT].right == ROOT {
            on_solution(&self.solution_rows);
            self.control.solutions_found.fetch_add(1, Ordering::Relaxed);
            trace.solution(depth, &self.solution_rows);
            return;
        }

        self.control.nodes_visited.fetch_add(1, Ordering::Relaxed);

        let Some(column) = self.choose_column() else {
            return;
        };
        let size = self.columns[column].size;
        if size == 0 {
            trace.dead_end(depth);
            return;
        }
        trace.column_chosen(depth, &self.columns[column].name, size);

        self.cover(column);
        let head = self.columns[column].head;

        let mut r = self.nodes[head].down;
        while r != head {
            self.solution_rows.push(self.nodes[r].row);

            let mut j = self.nodes[r].right;
            while j != r {
                let other = self.nodes[j].column;
                self.cover(other);
                j = self.nodes[j].right;
            }

            self.search_inner(depth + 1, on_solution, trace);

            let mut j = self.nodes[r].left;
            while j != r {
                let other = self.nodes[j].column;
                self.uncover(other);
                j = self.nodes[j].left;
            }
            self.solution_rows.pop();

            r = self.nodes[r].down;
        }
        self.uncover(column);
    }
}

impl Default for Dlx {
    fn default() -> Self {
        Self::new()
    }
}
