//! Core engine for an interactive single-player Sudoku client.
//!
//! This crate holds the synchronous game logic: the puzzle codec, the
//! row/column/box conflict validator, the elapsed-time clock, and the
//! session state machine that ties them together. It has no I/O and no
//! async runtime dependency; puzzle supply and UI wiring live in the
//! `kudoku-pool` and `kudoku-app` crates.

mod clock;
mod difficulty;
mod position;
mod puzzle;
mod session;
mod validator;

pub use clock::Clock;
pub use difficulty::Difficulty;
pub use position::Position;
pub use puzzle::{Puzzle, PuzzleError, CELL_COUNT, GRID_SIZE};
pub use session::{Mode, NoteSet, Session, SessionState};
pub use validator::has_conflict;

/// A 9x9 grid of cell values, `0` meaning empty.
pub type Grid = [[u8; GRID_SIZE]; GRID_SIZE];

/// A 9x9 mask, `true` marking clue cells.
pub type ClueMask = [[bool; GRID_SIZE]; GRID_SIZE];
