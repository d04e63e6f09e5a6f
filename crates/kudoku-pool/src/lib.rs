//! Puzzle supply for the Sudoku client.
//!
//! Keeps a per-difficulty FIFO queue of unconsumed serialized puzzles,
//! seeded from a bundled offline bank, drained by the UI, and topped back
//! up by a periodic background pass that asks an external generation
//! service for one puzzle per under-watermark tier. Puzzles are opaque
//! 81-character strings throughout; this crate never inspects them.

mod bank;
mod pool;
mod source;

pub use bank::PuzzleBank;
pub use pool::{Pool, PoolError, LOW_WATERMARK, REPLENISH_PERIOD, SEED_SIZE};
pub use source::{PuzzleSource, SourceError};
