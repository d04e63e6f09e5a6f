use serde::{Deserialize, Serialize};
use std::fmt;

/// Puzzle difficulty tier. Each tier has its own queue in the supply pool
/// and its own list in the offline bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[serde(rename = "med")]
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, in display order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Stable identifier, also the key used by the offline bank and the
    /// generation service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "med",
            Difficulty::Hard => "hard",
        }
    }

    /// Index into per-tier tables (`0..3`, same order as [`Self::ALL`]).
    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_keys() {
        assert_eq!(Difficulty::Easy.as_str(), "easy");
        assert_eq!(Difficulty::Medium.as_str(), "med");
        assert_eq!(Difficulty::Hard.as_str(), "hard");
    }

    #[test]
    fn test_indices_match_all_order() {
        for (i, d) in Difficulty::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }
}
