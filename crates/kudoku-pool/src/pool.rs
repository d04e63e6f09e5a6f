use crate::{PuzzleBank, PuzzleSource, SourceError};
use kudoku_core::Difficulty;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// How many bank puzzles each tier's queue is seeded with.
pub const SEED_SIZE: usize = 10;

/// Queue length below which the background pass fetches one more puzzle.
pub const LOW_WATERMARK: usize = 5;

/// Period of the background replenishment pass.
pub const REPLENISH_PERIOD: Duration = Duration::from_secs(30);

/// Errors surfaced to the pool's consumer.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The tier's queue was empty and the live fetch failed too. The
    /// consumer decides the UI messaging.
    #[error("puzzle supply exhausted for {difficulty}")]
    SupplyExhausted {
        difficulty: Difficulty,
        #[source]
        source: SourceError,
    },
}

/// Per-difficulty buffered cache of unconsumed puzzles.
///
/// Consumption is FIFO, so the oldest enqueued puzzle is served first.
/// Taking from an empty queue falls back to one synchronous live fetch
/// whose result bypasses the queue. The queues sit behind one async mutex,
/// held only for push/pop; fetches happen outside it, so a response that
/// arrives after the user has moved on is still appended to its
/// originating tier's queue.
pub struct Pool {
    source: Box<dyn PuzzleSource>,
    queues: Mutex<[VecDeque<String>; 3]>,
}

impl Pool {
    pub fn new(source: Box<dyn PuzzleSource>) -> Self {
        Self {
            source,
            queues: Mutex::new(std::array::from_fn(|_| VecDeque::new())),
        }
    }

    /// Seed every tier's queue from the offline bank: a uniform shuffle of
    /// the tier's list, truncated to [`SEED_SIZE`]. Replaces any previous
    /// queue contents.
    pub async fn seed(&self, bank: &PuzzleBank, rng: &mut impl Rng) {
        let mut queues = self.queues.lock().await;
        for difficulty in Difficulty::ALL {
            let mut sample = bank.puzzles(difficulty).to_vec();
            sample.shuffle(rng);
            sample.truncate(SEED_SIZE);
            info!(tier = %difficulty, count = sample.len(), "seeded puzzle queue");
            queues[difficulty.index()] = sample.into();
        }
    }

    /// Current queue length for one tier.
    pub async fn len(&self, difficulty: Difficulty) -> usize {
        self.queues.lock().await[difficulty.index()].len()
    }

    /// Take the next puzzle for `difficulty`.
    ///
    /// Pops the queue front when one is buffered. On an empty queue, asks
    /// the generation service for one puzzle and returns it directly
    /// without enqueueing; if that fetch fails as well the supply is
    /// exhausted.
    pub async fn take(&self, difficulty: Difficulty) -> Result<String, PoolError> {
        if let Some(puzzle) = self.queues.lock().await[difficulty.index()].pop_front() {
            debug!(tier = %difficulty, "serving buffered puzzle");
            return Ok(puzzle);
        }

        info!(tier = %difficulty, "queue empty, fetching live");
        self.fetch_one(difficulty)
            .await
            .map_err(|source| PoolError::SupplyExhausted { difficulty, source })
    }

    /// One replenishment pass: every tier below [`LOW_WATERMARK`] gets
    /// exactly one fetched puzzle appended at the tail. A failed fetch is
    /// logged and skipped; the queue stays short until the next pass.
    pub async fn replenish_once(&self) {
        for difficulty in Difficulty::ALL {
            if self.len(difficulty).await >= LOW_WATERMARK {
                continue;
            }
            match self.fetch_one(difficulty).await {
                Ok(puzzle) => {
                    // Appended even if the user swapped tiers meanwhile;
                    // the puzzle belongs to the tier it was fetched for.
                    self.queues.lock().await[difficulty.index()].push_back(puzzle);
                    debug!(tier = %difficulty, "replenished one puzzle");
                }
                Err(error) => {
                    warn!(tier = %difficulty, %error, "replenishment fetch failed");
                }
            }
        }
    }

    /// Background low-watermark refill loop. Runs a pass immediately, then
    /// one per [`REPLENISH_PERIOD`], reading queue lengths fresh each time;
    /// mutations between passes never trigger an out-of-band refill.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(REPLENISH_PERIOD);
        loop {
            interval.tick().await;
            self.replenish_once().await;
        }
    }

    /// Request one puzzle from the generation service, selecting the last
    /// candidate of the returned list.
    async fn fetch_one(&self, difficulty: Difficulty) -> Result<String, SourceError> {
        let mut candidates = self.source.fetch(difficulty).await?;
        candidates.pop().ok_or(SourceError::EmptyResponse)
    }
}
