use crate::{ClueMask, Grid};
use thiserror::Error;

/// Side length of the grid.
pub const GRID_SIZE: usize = 9;

/// Number of cells in a puzzle.
pub const CELL_COUNT: usize = 81;

/// Errors produced by the puzzle codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The string did not contain exactly 81 digit characters after
    /// stripping non-digits. Surfaced to the caller instead of padding.
    #[error("malformed puzzle: {digits} digit characters, expected 81")]
    Malformed { digits: usize },
}

/// A parsed, immutable puzzle: the starting grid plus its clue mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    cells: Grid,
    clues: ClueMask,
    blanks: usize,
}

impl Puzzle {
    /// Parse the 81-character serialized form: `'0'` is a blank cell,
    /// `'1'..='9'` are clues. Non-digit characters (whitespace, separators)
    /// are stripped first; anything other than exactly 81 remaining digits
    /// is [`PuzzleError::Malformed`].
    pub fn parse(s: &str) -> Result<Self, PuzzleError> {
        let digits: Vec<u8> = s
            .chars()
            .filter_map(|c| c.to_digit(10).map(|d| d as u8))
            .collect();
        if digits.len() != CELL_COUNT {
            return Err(PuzzleError::Malformed {
                digits: digits.len(),
            });
        }

        let mut cells: Grid = [[0; GRID_SIZE]; GRID_SIZE];
        let mut clues: ClueMask = [[false; GRID_SIZE]; GRID_SIZE];
        let mut blanks = 0;
        for (i, &d) in digits.iter().enumerate() {
            let (row, col) = (i / GRID_SIZE, i % GRID_SIZE);
            cells[row][col] = d;
            clues[row][col] = d != 0;
            if d == 0 {
                blanks += 1;
            }
        }

        Ok(Self {
            cells,
            clues,
            blanks,
        })
    }

    /// The starting grid, row-major.
    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    /// `true` where the puzzle pre-fills a cell.
    pub fn clue_mask(&self) -> &ClueMask {
        &self.clues
    }

    /// Number of blank cells; the session's initial remaining-count.
    pub fn blanks(&self) -> usize {
        self.blanks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEARLY_DONE: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_parse_round_positions() {
        let with_one_blank = format!("0{}", &NEARLY_DONE[1..]);
        let puzzle = Puzzle::parse(&with_one_blank).unwrap();
        assert_eq!(puzzle.cells()[0][0], 0);
        assert_eq!(puzzle.cells()[0][1], 3);
        assert_eq!(puzzle.cells()[8][8], 9);
        assert_eq!(puzzle.blanks(), 1);
    }

    #[test]
    fn test_clue_mask_matches_nonzero_digits() {
        let s = format!("00{}", &NEARLY_DONE[2..]);
        let puzzle = Puzzle::parse(&s).unwrap();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let ch = s.as_bytes()[row * GRID_SIZE + col];
                assert_eq!(puzzle.clue_mask()[row][col], ch != b'0');
            }
        }
    }

    #[test]
    fn test_parse_strips_non_digits() {
        let pretty: String = NEARLY_DONE
            .as_bytes()
            .chunks(9)
            .map(|row| std::str::from_utf8(row).unwrap())
            .collect::<Vec<_>>()
            .join("\n");
        let puzzle = Puzzle::parse(&pretty).unwrap();
        assert_eq!(puzzle.blanks(), 0);
    }

    #[test]
    fn test_too_short_is_malformed() {
        let err = Puzzle::parse(&NEARLY_DONE[..80]).unwrap_err();
        assert_eq!(err, PuzzleError::Malformed { digits: 80 });
    }

    #[test]
    fn test_too_long_is_malformed() {
        let long = format!("{}5", NEARLY_DONE);
        let err = Puzzle::parse(&long).unwrap_err();
        assert_eq!(err, PuzzleError::Malformed { digits: 82 });
    }

    #[test]
    fn test_empty_is_malformed() {
        assert_eq!(
            Puzzle::parse("").unwrap_err(),
            PuzzleError::Malformed { digits: 0 }
        );
    }
}
