//! Puzzle piece definitions and coordinate types.
//!
//! Each piece is defined as a set of unit cell positions in the plane,
//! normalized to start at the origin. A piece's id is its index in the
//! puzzle's piece list.

/// A 2D coordinate representing a unit cell position.
///
/// Tuple ordering gives the lexicographic (x, then y) order that shape
/// normalization relies on.
pub type Coord = (i32, i32);

/// One orientation of a piece: normalized, lexicographically sorted cells.
pub type Shape = Vec<Coord>;

/// The twelve pentominoes that tile the classic 6x10, 5x12, 4x15 and 3x20
/// rectangles.
///
/// Coordinates are normalized so the minimum coordinates are at the origin.
pub const PENTOMINOES: &[&[Coord]] = &[
    &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 2)], // F
    &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], // I
    &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 0)], // L
    &[(0, 0), (0, 1), (1, 1), (1, 2), (1, 3)], // N
    &[(0, 0), (0, 1), (1, 0), (1, 1), (0, 2)], // P
    &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)], // T
    &[(0, 0), (0, 1), (1, 0), (2, 0), (2, 1)], // U
    &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)], // V
    &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)], // W
    &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)], // X
    &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 1)], // Y
    &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)], // Z
];

/// The doubled tetromino set: two copies of each of the seven tetrominoes.
pub const TETROMINOES: &[&[Coord]] = &[
    // I
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    // O
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    // T
    &[(0, 0), (1, 0), (2, 0), (1, 1)],
    &[(0, 0), (1, 0), (2, 0), (1, 1)],
    // S
    &[(1, 0), (2, 0), (0, 1), (1, 1)],
    &[(1, 0), (2, 0), (0, 1), (1, 1)],
    // Z
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
    // J
    &[(0, 0), (0, 1), (1, 1), (2, 1)],
    &[(0, 0), (0, 1), (1, 1), (2, 1)],
    // L
    &[(2, 0), (0, 1), (1, 1), (2, 1)],
    &[(2, 0), (0, 1), (1, 1), (2, 1)],
];

/// The twelve IQ Blocks pieces (a commercial 10x6 packing puzzle).
pub const IQ_BLOCKS: &[&[Coord]] = &[
    &[(0, 0), (1, 0), (1, 1), (2, 1), (3, 1)],
    &[(0, 0), (1, 0), (2, 0), (0, 1), (0, 2)],
    &[(0, 0), (1, 0), (2, 0), (3, 0), (2, 1)],
    &[(0, 0), (1, 0), (2, 0), (3, 0), (0, 1)],
    &[(0, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
    &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)],
    &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)],
    &[(0, 0), (1, 0), (0, 1)],
    &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (2, 0), (1, 1)],
    &[(0, 0), (1, 0), (2, 0), (2, 1)],
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
];

/// Returns a predefined piece set as owned shapes, ready for a puzzle.
pub fn shapes_of(set: &[&[Coord]]) -> Vec<Shape> {
    set.iter().map(|piece| piece.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pentominoes_are_twelve_five_cell_pieces() {
        assert_eq!(PENTOMINOES.len(), 12);
        for piece in PENTOMINOES {
            assert_eq!(piece.len(), 5);
        }
    }

    #[test]
    fn tetromino_set_is_doubled() {
        assert_eq!(TETROMINOES.len(), 14);
        for pair in TETROMINOES.chunks(2) {
            assert_eq!(pair[0], pair[1]);
            assert_eq!(pair[0].len(), 4);
        }
    }

    #[test]
    fn iq_blocks_cover_sixty_cells() {
        let total: usize = IQ_BLOCKS.iter().map(|piece| piece.len()).sum();
        assert_eq!(total, 60);
    }
}
