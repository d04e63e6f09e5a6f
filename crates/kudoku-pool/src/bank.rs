use kudoku_core::Difficulty;
use serde::Deserialize;

/// The offline puzzle bank bundled with the client, keyed by difficulty.
const BUNDLED_JSON: &str = include_str!("../assets/puzzles.json");

/// A static mapping from difficulty tier to serialized puzzle strings,
/// loaded once at startup. Read-only; the pool copies what it seeds from.
#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleBank {
    easy: Vec<String>,
    med: Vec<String>,
    hard: Vec<String>,
}

impl PuzzleBank {
    /// The bank shipped inside the binary.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_JSON)
    }

    /// Parse a bank from its JSON form:
    /// `{"easy": [...], "med": [...], "hard": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The bank's puzzle list for one tier.
    pub fn puzzles(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.med,
            Difficulty::Hard => &self.hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_bank_parses() {
        let bank = PuzzleBank::bundled().unwrap();
        for difficulty in Difficulty::ALL {
            let puzzles = bank.puzzles(difficulty);
            assert!(!puzzles.is_empty(), "no bundled {} puzzles", difficulty);
            for p in puzzles {
                assert_eq!(p.len(), 81);
            }
        }
    }

    #[test]
    fn test_from_json_uses_tier_keys() {
        let bank =
            PuzzleBank::from_json(r#"{"easy": ["E"], "med": ["M"], "hard": ["H1", "H2"]}"#)
                .unwrap();
        assert_eq!(bank.puzzles(Difficulty::Easy), ["E"]);
        assert_eq!(bank.puzzles(Difficulty::Medium), ["M"]);
        assert_eq!(bank.puzzles(Difficulty::Hard).len(), 2);
    }

    #[test]
    fn test_missing_tier_is_an_error() {
        assert!(PuzzleBank::from_json(r#"{"easy": []}"#).is_err());
    }
}
