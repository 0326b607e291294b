//! Placement enumeration: every legal position of every piece orientation.
//!
//! The output order is load-bearing: a placement's position in the returned
//! list is the row id the cover matrix uses, which in turn fixes the order
//! solutions are discovered. The scan runs pieces in input order,
//! orientations in generated order, then origins row by row.

use crate::board::Board;
use crate::geometry::all_orientations;
use crate::pieces::Shape;

/// One legal placement: a piece id plus the covered linear cell indices.
///
/// The cells follow the orientation's own coordinate order rather than
/// being re-sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub piece: usize,
    pub cells: Vec<usize>,
}

/// Enumerates all placements of all pieces on the board.
///
/// A placement is emitted only if every covered cell is inside the board
/// and mask-enabled. Pieces larger than the board simply produce no
/// placements.
pub fn enumerate_placements(pieces: &[Shape], board: &Board) -> Vec<Placement> {
    let width = board.width() as i32;
    let height = board.height() as i32;

    let mut placements = Vec::new();

    for (piece, shape) in pieces.iter().enumerate() {
        for orientation in all_orientations(shape) {
            let max_x = orientation.iter().map(|&(x, _)| x).max().unwrap();
            let max_y = orientation.iter().map(|&(_, y)| y).max().unwrap();

            for oy in 0..height - max_y {
                for ox in 0..width - max_x {
                    let fits = orientation
                        .iter()
                        .all(|&(x, y)| board.is_usable(ox + x, oy + y));
                    if !fits {
                        continue;
                    }

                    let cells = orientation
                        .iter()
                        .map(|&(x, y)| board.index((ox + x) as usize, (oy + y) as usize))
                        .collect();
                    placements.push(Placement { piece, cells });
                }
            }
        }
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{shapes_of, PENTOMINOES};

    #[test]
    fn domino_on_2x2_has_four_placements_in_scan_order() {
        let board = Board::new(2, 2);
        let placements = enumerate_placements(&[vec![(0, 0), (1, 0)]], &board);

        let cells: Vec<Vec<usize>> = placements.iter().map(|p| p.cells.clone()).collect();
        // horizontal orientation scans rows first, then the vertical one
        assert_eq!(
            cells,
            vec![vec![0, 1], vec![2, 3], vec![0, 2], vec![1, 3]]
        );
        assert!(placements.iter().all(|p| p.piece == 0));
    }

    #[test]
    fn placements_avoid_holes() {
        let board = Board::with_holes(2, 2, &[(1, 1)]);
        let placements = enumerate_placements(&[vec![(0, 0), (1, 0)]], &board);

        let cells: Vec<Vec<usize>> = placements.iter().map(|p| p.cells.clone()).collect();
        assert_eq!(cells, vec![vec![0, 1], vec![0, 2]]);
    }

    #[test]
    fn oversized_piece_has_no_placements() {
        let board = Board::new(3, 1);
        let placements = enumerate_placements(&[vec![(0, 0), (1, 0), (2, 0), (3, 0)]], &board);
        assert!(placements.is_empty());
    }

    #[test]
    fn placement_invariants_hold_with_holes() {
        let board = Board::with_holes(10, 6, &[(4, 2), (5, 3)]);
        let pieces = shapes_of(PENTOMINOES);
        let placements = enumerate_placements(&pieces, &board);
        assert!(!placements.is_empty());

        for placement in &placements {
            assert_eq!(placement.cells.len(), pieces[placement.piece].len());
            for &cell in &placement.cells {
                assert!(cell < board.cells());
                assert!(board.mask()[cell]);
            }
            let mut deduped = placement.cells.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), placement.cells.len());
        }
    }

    #[test]
    fn enumeration_is_reproducible() {
        let board = Board::with_holes(6, 5, &[(0, 0)]);
        let pieces = shapes_of(PENTOMINOES);
        assert_eq!(
            enumerate_placements(&pieces, &board),
            enumerate_placements(&pieces, &board)
        );
    }
}
