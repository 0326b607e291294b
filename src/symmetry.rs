//! Solution classification under the board's symmetry group.
//!
//! A filled board has up to 8 symmetric images: the identity, three
//! rotations, and four reflections. Two solutions are equivalent when some
//! image of one matches the other. Classification works on canonical
//! tokens: serialize every image, keep the lexicographically smallest.
//!
//! Tokens relabel piece numbers in first-encounter scan order, so only the
//! occupancy pattern matters; which concrete piece fills a region does not
//! distinguish solutions.

use rustc_hash::FxHashSet;

/// One element of the rectangle's dihedral group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymmetryOp {
    Rot0,
    Rot90,
    Rot180,
    Rot270,
    /// Mirror over the vertical axis.
    ReflectX,
    /// Mirror over the horizontal axis.
    ReflectY,
    /// Reflect over the main diagonal (y = x).
    ReflectDiag,
    /// Reflect over the anti-diagonal.
    ReflectAnti,
}

/// All 8 symmetries, identity first.
pub const SYMMETRY_OPS: [SymmetryOp; 8] = [
    SymmetryOp::Rot0,
    SymmetryOp::Rot90,
    SymmetryOp::Rot180,
    SymmetryOp::Rot270,
    SymmetryOp::ReflectX,
    SymmetryOp::ReflectY,
    SymmetryOp::ReflectDiag,
    SymmetryOp::ReflectAnti,
];

impl SymmetryOp {
    /// Whether the transform exchanges board width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(
            self,
            SymmetryOp::Rot90 | SymmetryOp::Rot270 | SymmetryOp::ReflectDiag | SymmetryOp::ReflectAnti
        )
    }

    /// Maps (x, y) on a `width` x `height` grid to its transformed position.
    fn apply(self, x: usize, y: usize, width: usize, height: usize) -> (usize, usize) {
        match self {
            SymmetryOp::Rot0 => (x, y),
            SymmetryOp::Rot90 => (height - 1 - y, x),
            SymmetryOp::Rot180 => (width - 1 - x, height - 1 - y),
            SymmetryOp::Rot270 => (y, width - 1 - x),
            SymmetryOp::ReflectX => (width - 1 - x, y),
            SymmetryOp::ReflectY => (x, height - 1 - y),
            SymmetryOp::ReflectDiag => (y, x),
            SymmetryOp::ReflectAnti => (height - 1 - y, width - 1 - x),
        }
    }
}

/// Comparable serialization of one board image; the equivalence-class key.
pub type CanonicalToken = Vec<u8>;

struct TransformedBoard {
    grid: Vec<u8>,
    mask: Vec<bool>,
    width: usize,
}

/// Remaps grid and mask together under one symmetry.
fn apply_symmetry(
    grid: &[u8],
    mask: &[bool],
    width: usize,
    height: usize,
    op: SymmetryOp,
) -> TransformedBoard {
    let new_width = if op.swaps_axes() { height } else { width };

    let mut new_grid = vec![0u8; grid.len()];
    let mut new_mask = vec![false; mask.len()];

    for y in 0..height {
        for x in 0..width {
            let (nx, ny) = op.apply(x, y, width, height);
            let dest = ny * new_width + nx;
            new_grid[dest] = grid[y * width + x];
            new_mask[dest] = mask[y * width + x];
        }
    }

    TransformedBoard {
        grid: new_grid,
        mask: new_mask,
        width: new_width,
    }
}

/// Serializes the enabled cells of a board image, row-major, relabeling
/// piece numbers in first-encounter order. Holes are skipped entirely so
/// they cannot perturb the ordering. An uncovered enabled cell serializes
/// as 0; a full exact cover never produces one.
fn relabeled_token(grid: &[u8], mask: &[bool]) -> CanonicalToken {
    let mut remap = [0u8; 256];
    let mut next = 1u8;

    let mut token = Vec::with_capacity(mask.len());
    for (index, &usable) in mask.iter().enumerate() {
        if !usable {
            continue;
        }
        let value = grid[index] as usize;
        if value == 0 {
            token.push(0);
            continue;
        }
        if remap[value] == 0 {
            remap[value] = next;
            next += 1;
        }
        token.push(remap[value]);
    }
    token
}

/// Computes the canonical token: the lexicographically smallest relabeled
/// serialization across all 8 symmetries.
///
/// Panics if `grid` or `mask` does not match the declared dimensions; that
/// is a programming error, not a recoverable condition.
pub fn canonical_form(grid: &[u8], mask: &[bool], width: usize, height: usize) -> CanonicalToken {
    assert_eq!(grid.len(), width * height, "grid does not match dimensions");
    assert_eq!(mask.len(), width * height, "mask does not match dimensions");

    let mut best = relabeled_token(grid, mask);
    for op in &SYMMETRY_OPS[1..] {
        let transformed = apply_symmetry(grid, mask, width, height, *op);
        let token = relabeled_token(&transformed.grid, &transformed.mask);
        if token < best {
            best = token;
        }
    }
    best
}

/// Caller-owned record of the symmetry classes encountered so far.
///
/// Each search session owns its instance, so independent sessions and tests
/// cannot interfere. Shared use across concurrent engines needs external
/// synchronization.
#[derive(Debug, Default)]
pub struct SeenSolutions {
    seen: FxHashSet<CanonicalToken>,
}

impl SeenSolutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct symmetry classes recorded.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Records the board's symmetry class; true iff it was not seen before.
    pub fn is_new(&mut self, grid: &[u8], mask: &[bool], width: usize, height: usize) -> bool {
        self.seen.insert(canonical_form(grid, mask, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_2X2: &[bool] = &[true; 4];

    #[test]
    fn canonical_form_is_a_fixed_point_of_the_group() {
        // two corner trominoes interlocked on a 3x2 board
        let grid = [1, 1, 2, 1, 2, 2];
        let mask = [true; 6];

        let reference = canonical_form(&grid, &mask, 3, 2);
        for op in SYMMETRY_OPS {
            let transformed = apply_symmetry(&grid, &mask, 3, 2, op);
            let height = grid.len() / transformed.width;
            assert_eq!(
                canonical_form(
                    &transformed.grid,
                    &transformed.mask,
                    transformed.width,
                    height
                ),
                reference,
                "transform {op:?} escaped its symmetry class"
            );
        }
    }

    #[test]
    fn piece_relabeling_does_not_distinguish_solutions() {
        let a = [1, 1, 2, 1, 2, 2];
        let b = [2, 2, 1, 2, 1, 1];
        let mask = [true; 6];
        assert_eq!(canonical_form(&a, &mask, 3, 2), canonical_form(&b, &mask, 3, 2));
    }

    #[test]
    fn rotated_tilings_share_a_class() {
        let horizontal_pair = [1, 1, 2, 2];
        let vertical_pair = [1, 2, 1, 2];
        assert_eq!(
            canonical_form(&horizontal_pair, FULL_2X2, 2, 2),
            canonical_form(&vertical_pair, FULL_2X2, 2, 2)
        );

        let mut seen = SeenSolutions::new();
        assert!(seen.is_new(&horizontal_pair, FULL_2X2, 2, 2));
        assert!(!seen.is_new(&vertical_pair, FULL_2X2, 2, 2));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn distinct_patterns_stay_distinct() {
        let two_dominoes = [1, 1, 2, 2];
        let one_square = [1, 1, 1, 1];
        assert_ne!(
            canonical_form(&two_dominoes, FULL_2X2, 2, 2),
            canonical_form(&one_square, FULL_2X2, 2, 2)
        );
    }

    #[test]
    fn holes_are_invisible_to_the_token() {
        // domino ring around a center hole
        let grid = [1, 1, 2, 4, 0, 2, 4, 3, 3];
        let mask = [
            true, true, true, //
            true, false, true, //
            true, true, true,
        ];

        let token = canonical_form(&grid, &mask, 3, 3);
        assert_eq!(token.len(), 8);
        assert!(token.iter().all(|&symbol| symbol != 0));
    }

    #[test]
    fn token_symbols_follow_first_encounter_order() {
        let grid = [7, 7, 3, 3];
        let token = relabeled_token(&grid, FULL_2X2);
        assert_eq!(token, vec![1, 1, 2, 2]);
    }

    #[test]
    #[should_panic(expected = "grid does not match dimensions")]
    fn dimension_mismatch_fails_fast() {
        canonical_form(&[1, 1], &[true, true, true], 3, 1);
    }
}
