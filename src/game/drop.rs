//! Column drop: where a piece lands when released into a column.

use super::board::{Coord, HEIGHT, WIDTH};
use crate::error::MoveError;

/// Lowest unoccupied row of `column` given the combined occupancy mask.
///
/// Returns `Ok(None)` when the column is full; that is an ordinary outcome
/// rather than an error. A column outside `0..WIDTH` is `InvalidColumn`.
pub fn open_row(occupied: u64, column: isize) -> Result<Option<usize>, MoveError> {
    let col = checked_column(column)?;

    // Scan from the bottom up
    for row in (0..HEIGHT).rev() {
        if occupied & (Coord { row, col }).mask() == 0 {
            log::trace!("column {col}: first open row is {row}");
            return Ok(Some(row));
        }
    }

    log::trace!("column {col} is full");
    Ok(None)
}

/// Validate a signed column index.
pub fn checked_column(column: isize) -> Result<usize, MoveError> {
    if column < 0 || column as usize >= WIDTH {
        return Err(MoveError::InvalidColumn(column));
    }
    Ok(column as usize)
}

/// Check if a column has no room left. `col` must be below `WIDTH`.
pub fn is_column_full(occupied: u64, col: usize) -> bool {
    debug_assert!(col < WIDTH);
    occupied & (Coord { row: 0, col }).mask() != 0
}
