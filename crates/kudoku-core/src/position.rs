use serde::{Deserialize, Serialize};

/// A cell coordinate on the 9x9 grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Coordinates must be in `0..9`.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Index of the 3x3 box containing this cell (`0..9`, row-major).
    pub fn box_index(&self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Whether this cell shares a row, column, or box with `other`.
    pub fn is_peer_of(&self, other: Position) -> bool {
        self.row == other.row || self.col == other.col || self.box_index() == other.box_index()
    }
}
