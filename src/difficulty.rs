//! Difficulty presets for the AI
//!
//! A [`DifficultyProfile`] bundles every knob that weakens or strengthens
//! play. Selecting a level replaces the whole profile at once.
//!
//! | level  | depth | randomness | radius | selector cap |
//! |--------|-------|------------|--------|--------------|
//! | easy   | 1     | 0.4        | 1      | 10           |
//! | medium | 2     | 0.15       | 1      | none         |
//! | hard   | 3     | 0.0        | 2      | none         |
//!
//! Unknown names map to [`DifficultyProfile::FALLBACK`] (depth 2, radius 1,
//! randomness 0.2).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Candidate cap applied by the move selector at the easy level
pub const EASY_CANDIDATE_CAP: usize = 10;

/// Named strength levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty level `{0}` (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Preset profile for this level
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile::EASY,
            Difficulty::Medium => DifficultyProfile::MEDIUM,
            Difficulty::Hard => DifficultyProfile::HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseDifficultyError(name.to_string()))
    }
}

/// Search and noise settings for one strength level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Plies searched, counting the candidate move itself (>= 1)
    pub search_depth: u8,
    /// Probability in [0, 1] of a random move (easy) or score noise
    pub randomness: f64,
    /// Candidate neighborhood radius, 1 or 2
    pub neighborhood_radius: u8,
    /// Cap on candidates the move selector evaluates
    pub candidate_cap: Option<usize>,
}

impl DifficultyProfile {
    pub const EASY: DifficultyProfile = DifficultyProfile {
        search_depth: 1,
        randomness: 0.4,
        neighborhood_radius: 1,
        candidate_cap: Some(EASY_CANDIDATE_CAP),
    };

    pub const MEDIUM: DifficultyProfile = DifficultyProfile {
        search_depth: 2,
        randomness: 0.15,
        neighborhood_radius: 1,
        candidate_cap: None,
    };

    pub const HARD: DifficultyProfile = DifficultyProfile {
        search_depth: 3,
        randomness: 0.0,
        neighborhood_radius: 2,
        candidate_cap: None,
    };

    /// Profile for names that match no level
    pub const FALLBACK: DifficultyProfile = DifficultyProfile {
        search_depth: 2,
        randomness: 0.2,
        neighborhood_radius: 1,
        candidate_cap: None,
    };

    /// Lenient lookup: unknown names give [`DifficultyProfile::FALLBACK`].
    pub fn from_name(name: &str) -> Self {
        name.parse::<Difficulty>()
            .map_or(Self::FALLBACK, Difficulty::profile)
    }

    /// The weakest setting: one ply, no four-threat scan
    #[inline]
    pub fn is_lowest(&self) -> bool {
        self.search_depth <= 1
    }

    /// No randomness at all, so play is deterministic
    #[inline]
    pub fn is_highest(&self) -> bool {
        self.randomness <= 0.0
    }

    /// Whether a move may be replaced outright by a random candidate
    #[inline]
    pub fn allows_random_move(&self) -> bool {
        self.is_lowest() && !self.is_highest()
    }

    /// `randomness` clamped into a valid probability
    #[inline]
    pub fn probability(&self) -> f64 {
        if self.randomness.is_nan() {
            0.0
        } else {
            self.randomness.clamp(0.0, 1.0)
        }
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::FALLBACK
    }
}
