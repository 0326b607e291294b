//! File I/O for saving and loading puzzle solutions.
//!
//! Binary format (little endian):
//! - u32: solution count
//! - repeat per solution:
//!   - u32: row count
//!   - repeat per row: u32 row (placement) id
//!
//! Row ids only stay meaningful alongside the placement list that produced
//! them, so the text format exists for standalone inspection.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::board::Board;
use crate::placement::Placement;

/// Saves solutions in human-readable text format.
pub fn save_text(
    path: &Path,
    board: &Board,
    placements: &[Placement],
    solutions: &[Vec<usize>],
) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Found {} solutions:\n", solutions.len())?;
    for (i, rows) in solutions.iter().enumerate() {
        writeln!(file, "Solution {}:", i + 1)?;
        let grid = board.solution_grid(placements, rows);
        write!(file, "{}", board.format_grid(&grid))?;
        writeln!(file)?;
    }
    Ok(())
}

/// Saves solutions in compact binary format for fast loading.
pub fn save_binary(path: &Path, solutions: &[Vec<usize>]) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    file.write_all(&(solutions.len() as u32).to_le_bytes())?;
    for rows in solutions {
        file.write_all(&(rows.len() as u32).to_le_bytes())?;
        for &row in rows {
            file.write_all(&(row as u32).to_le_bytes())?;
        }
    }

    Ok(())
}

/// Loads all solutions from a binary file.
///
/// Returns `None` if the file is missing or truncated.
pub fn load_binary(path: &Path) -> Option<Vec<Vec<usize>>> {
    let mut file = File::open(path).ok()?;
    let mut u32_buffer = [0u8; 4];

    file.read_exact(&mut u32_buffer).ok()?;
    let solution_count = u32::from_le_bytes(u32_buffer) as usize;

    let mut solutions = Vec::with_capacity(solution_count);
    for _ in 0..solution_count {
        file.read_exact(&mut u32_buffer).ok()?;
        let row_count = u32::from_le_bytes(u32_buffer) as usize;

        let mut rows = Vec::with_capacity(row_count);
        for _ in 0..row_count {
            file.read_exact(&mut u32_buffer).ok()?;
            rows.push(u32::from_le_bytes(u32_buffer) as usize);
        }
        solutions.push(rows);
    }

    Some(solutions)
}

/// Returns the number of saved solutions without loading them all.
pub fn count(path: &Path) -> Option<usize> {
    let mut file = File::open(path).ok()?;
    let mut u32_buffer = [0u8; 4];
    file.read_exact(&mut u32_buffer).ok()?;
    Some(u32::from_le_bytes(u32_buffer) as usize)
}
