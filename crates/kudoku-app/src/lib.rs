//! The consumer (UI) contract of the Sudoku client.
//!
//! [`GameClient`] wires the session state machine to the puzzle supply
//! pool and exposes the semantic actions a front end triggers: digit
//! entry, selection, mode toggling, clearing, and requesting a new puzzle
//! of a given difficulty. Rendering and event wiring stay outside; the
//! front end reads the session's queries and draws.
//!
//! Three asynchronous activities coexist: the UI's one-second [`tick`],
//! the pool's background replenishment task, and user actions. The client
//! awaits `Pool::take` before loading, so a load always happens before
//! the first input against the new puzzle.
//!
//! [`tick`]: GameClient::tick

use std::sync::Arc;

use kudoku_core::{Difficulty, Mode, Position, PuzzleError, Session};
use kudoku_pool::{Pool, PoolError, PuzzleBank};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::info;

/// Errors surfaced through the consumer contract.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

/// Interactive game client: one session, one shared supply pool.
pub struct GameClient {
    session: Session,
    pool: Arc<Pool>,
    difficulty: Difficulty,
}

impl GameClient {
    /// Create a client over an already-seeded pool. No puzzle is loaded
    /// yet; call [`GameClient::request_new_puzzle`] to start playing.
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            session: Session::new(),
            pool,
            difficulty: Difficulty::Easy,
        }
    }

    /// Seed a pool from the offline bank and spawn its background
    /// replenishment task. The task runs until the returned handle is
    /// dropped or aborted.
    pub async fn start_pool(
        pool: Arc<Pool>,
        bank: &PuzzleBank,
        rng: &mut impl rand::Rng,
    ) -> JoinHandle<()> {
        pool.seed(bank, rng).await;
        tokio::spawn(async move { pool.run().await })
    }

    /// Take the next puzzle of `difficulty` from the pool and load it,
    /// replacing the current session. The clock restarts from zero.
    pub async fn request_new_puzzle(&mut self, difficulty: Difficulty) -> Result<(), ClientError> {
        self.difficulty = difficulty;
        let puzzle = self.pool.take(difficulty).await?;
        self.session.load(&puzzle)?;
        info!(tier = %difficulty, "loaded new puzzle");
        Ok(())
    }

    /// Load an explicit serialized puzzle, bypassing the pool.
    pub fn load(&mut self, puzzle: &str) -> Result<(), ClientError> {
        self.session.load(puzzle)?;
        Ok(())
    }

    /// The difficulty of the most recently requested puzzle.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Deliver the UI's one-second timer tick.
    pub fn tick(&mut self) {
        self.session.tick();
    }

    // Semantic actions, delegated to the session.

    pub fn select(&mut self, row: usize, col: usize) {
        self.session.select(row, col);
    }

    pub fn select_delta(&mut self, d_row: i32, d_col: i32) {
        self.session.select_delta(d_row, d_col);
    }

    pub fn toggle_mode(&mut self) {
        self.session.toggle_mode();
    }

    pub fn enter_digit(&mut self, value: u8) {
        self.session.enter_digit(value);
    }

    pub fn clear_selected(&mut self) {
        self.session.clear_selected();
    }

    pub fn reset_to_clues(&mut self) {
        self.session.reset_to_clues();
    }

    // Read-only queries.

    /// The full session state (grid, clue mask, notes, conflict flags,
    /// selection, mode, remaining-count, finished flag, elapsed time, and
    /// the highlight queries).
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn selection(&self) -> Position {
        self.session.selection()
    }

    pub fn remaining(&self) -> usize {
        self.session.remaining()
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    pub fn elapsed_string(&self) -> String {
        self.session.elapsed_string()
    }
}
