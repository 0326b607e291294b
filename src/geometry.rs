//! 2D rotation and reflection utilities.
//!
//! A free polyomino has at most 8 orientations in the plane: 4 rotations,
//! each optionally mirrored. Symmetric pieces produce fewer; the count is
//! always a divisor of 8.

use crate::pieces::{Coord, Shape};

/// Translates a shape so the minimum x and y are both zero, then sorts it.
///
/// Two orientations that differ only by translation normalize to the same
/// sequence, which is what makes shape equality a plain `Vec` comparison.
pub fn normalize(mut shape: Shape) -> Shape {
    let min_x = shape.iter().map(|&(x, _)| x).min().unwrap();
    let min_y = shape.iter().map(|&(_, y)| y).min().unwrap();

    for (x, y) in &mut shape {
        *x -= min_x;
        *y -= min_y;
    }

    shape.sort_unstable();
    shape
}

/// Rotates a shape 90 degrees counterclockwise: (x, y) -> (-y, x).
pub fn rotate90(shape: &[Coord]) -> Shape {
    normalize(shape.iter().map(|&(x, y)| (-y, x)).collect())
}

/// Mirrors a shape across the vertical axis: (x, y) -> (-x, y).
pub fn reflect_x(shape: &[Coord]) -> Shape {
    normalize(shape.iter().map(|&(x, y)| (-x, y)).collect())
}

/// Generates all distinct orientations of a piece, in first-seen order.
///
/// Walks the four rotations of the normalized base; at each rotation both
/// the rotation itself and its mirror image are candidates. Duplicates are
/// skipped, so the output order is stable and the base shape always comes
/// first. Placement enumeration depends on this order staying fixed, since
/// it determines row identifiers in the cover matrix.
pub fn all_orientations(base: &[Coord]) -> Vec<Shape> {
    assert!(!base.is_empty(), "piece shape must not be empty");

    let mut orientations: Vec<Shape> = Vec::new();
    let mut current = normalize(base.to_vec());

    for _ in 0..4 {
        for candidate in [current.clone(), reflect_x(&current)] {
            if !orientations.contains(&candidate) {
                orientations.push(candidate);
            }
        }
        current = rotate90(&current);
    }

    orientations
}
