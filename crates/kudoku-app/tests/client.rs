//! End-to-end tests for the consumer contract: pool-backed puzzle loading,
//! play-through to completion, and error surfacing.

use async_trait::async_trait;
use kudoku_app::{ClientError, GameClient};
use kudoku_core::{Difficulty, Position, SessionState};
use kudoku_pool::{Pool, PuzzleBank, PuzzleSource, SourceError};
use std::sync::Arc;

/// A valid grid with a single blank at (0, 0); its unique digit is 5.
const ONE_BLANK: &str =
    "034678912672195348198342567859761423426853791713924856961537284287419635345286179";

/// Generation service stub that always serves the same candidate list.
struct FixedSource(Vec<String>);

#[async_trait]
impl PuzzleSource for FixedSource {
    async fn fetch(&self, _difficulty: Difficulty) -> Result<Vec<String>, SourceError> {
        if self.0.is_empty() {
            Err(SourceError::Request("service down".into()))
        } else {
            Ok(self.0.clone())
        }
    }
}

fn one_puzzle_bank() -> PuzzleBank {
    let json = format!(r#"{{"easy": ["{ONE_BLANK}"], "med": [], "hard": []}}"#);
    PuzzleBank::from_json(&json).unwrap()
}

#[tokio::test]
async fn test_request_play_and_finish() {
    let pool = Arc::new(Pool::new(Box::new(FixedSource(vec![ONE_BLANK.into()]))));
    let replenisher =
        GameClient::start_pool(Arc::clone(&pool), &one_puzzle_bank(), &mut rand::thread_rng())
            .await;

    let mut client = GameClient::new(Arc::clone(&pool));
    client.request_new_puzzle(Difficulty::Easy).await.unwrap();
    assert_eq!(client.difficulty(), Difficulty::Easy);
    assert_eq!(client.remaining(), 1);

    for _ in 0..7 {
        client.tick();
    }
    client.select(0, 0);
    client.enter_digit(5);

    assert!(client.is_finished());
    assert_eq!(client.remaining(), 0);
    assert_eq!(client.session().state(), SessionState::Finished);

    // Completion time stays frozen under further ticks.
    client.tick();
    assert_eq!(client.elapsed_string(), "00:00:07");

    replenisher.abort();
}

#[tokio::test]
async fn test_cold_tier_falls_back_to_generation_service() {
    // The medium queue is never seeded, so the first request goes live.
    let pool = Arc::new(Pool::new(Box::new(FixedSource(vec![ONE_BLANK.into()]))));
    let mut client = GameClient::new(pool);

    client.request_new_puzzle(Difficulty::Medium).await.unwrap();
    assert_eq!(client.difficulty(), Difficulty::Medium);
    assert_eq!(client.session().state(), SessionState::Active);
}

#[tokio::test]
async fn test_exhausted_supply_surfaces_pool_error() {
    let pool = Arc::new(Pool::new(Box::new(FixedSource(vec![]))));
    let mut client = GameClient::new(pool);

    let err = client.request_new_puzzle(Difficulty::Hard).await.unwrap_err();
    assert!(matches!(err, ClientError::Pool(_)));
    // Nothing was loaded.
    assert_eq!(client.session().state(), SessionState::Loading);
}

#[tokio::test]
async fn test_malformed_puzzle_surfaces_codec_error_and_keeps_session() {
    let good = Arc::new(Pool::new(Box::new(FixedSource(vec![ONE_BLANK.into()]))));
    let mut client = GameClient::new(good);
    client.request_new_puzzle(Difficulty::Easy).await.unwrap();
    client.select(3, 3);

    let err = client.load("too short").unwrap_err();
    assert!(matches!(err, ClientError::Puzzle(_)));

    // The previous session is untouched by the failed load.
    assert_eq!(client.session().state(), SessionState::Active);
    assert_eq!(client.selection(), Position::new(3, 3));
    assert_eq!(client.remaining(), 1);
}

#[tokio::test]
async fn test_new_puzzle_resets_finished_session() {
    let pool = Arc::new(Pool::new(Box::new(FixedSource(vec![ONE_BLANK.into()]))));
    let mut client = GameClient::new(pool);

    client.request_new_puzzle(Difficulty::Easy).await.unwrap();
    client.enter_digit(5);
    assert!(client.is_finished());

    client.request_new_puzzle(Difficulty::Easy).await.unwrap();
    assert!(!client.is_finished());
    assert_eq!(client.remaining(), 1);
    assert_eq!(client.elapsed_string(), "00:00:00");
}
