use crate::{Grid, GRID_SIZE};

/// Check whether the value at `(row, col)` violates the row, column, or
/// box uniqueness constraint.
///
/// Callers invoke this after writing the candidate value into the grid, so
/// the scan always sees the cell's own value once in each line. A line is
/// in conflict only when it holds the value at least twice, which requires
/// another cell sharing the line. O(27): three linear scans of 9 cells.
pub fn has_conflict(grid: &Grid, row: usize, col: usize, value: u8) -> bool {
    if value == 0 {
        return false;
    }

    let mut row_hits = 0;
    let mut col_hits = 0;
    for i in 0..GRID_SIZE {
        if grid[row][i] == value {
            row_hits += 1;
        }
        if grid[i][col] == value {
            col_hits += 1;
        }
    }
    if row_hits >= 2 || col_hits >= 2 {
        return true;
    }

    let box_row = (row / 3) * 3;
    let box_col = (col / 3) * 3;
    let mut box_hits = 0;
    for r in box_row..box_row + 3 {
        for c in box_col..box_col + 3 {
            if grid[r][c] == value {
                box_hits += 1;
            }
        }
    }
    box_hits >= 2
}
