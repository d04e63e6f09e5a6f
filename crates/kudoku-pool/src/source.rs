use async_trait::async_trait;
use kudoku_core::Difficulty;
use thiserror::Error;

/// Errors from the puzzle-generation boundary.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request itself failed (network, service error).
    #[error("generation request failed: {0}")]
    Request(String),

    /// The service answered with an empty candidate list.
    #[error("generation service returned no puzzles")]
    EmptyResponse,
}

/// The external puzzle-generation service, reduced to its wire contract:
/// a difficulty goes in, an ordered list of candidate puzzle strings comes
/// back. Treated as fallible and latent; the algorithm behind it is opaque.
#[async_trait]
pub trait PuzzleSource: Send + Sync {
    async fn fetch(&self, difficulty: Difficulty) -> Result<Vec<String>, SourceError>;
}
