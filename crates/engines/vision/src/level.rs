//! Difficulty tiers and the policy that turns a tier into a plan.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chance that tier 1 skips straight to a random move.
pub const BEGINNER_RANDOM_RATE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("level {0} is out of range (expected 1-10)")]
    OutOfRange(u8),
    #[error("level '{0}' is not a number")]
    NotANumber(String),
}

/// Difficulty tier, 1 (weakest) to 10 (strongest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    pub const MIN: Tier = Tier(1);
    pub const MAX: Tier = Tier(10);

    pub fn new(level: u8) -> Result<Self, LevelError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(Tier(level))
        } else {
            Err(LevelError::OutOfRange(level))
        }
    }

    /// All tiers in ascending order.
    pub fn all() -> impl Iterator<Item = Tier> {
        (Self::MIN.0..=Self::MAX.0).map(Tier)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn profile(self) -> &'static LevelProfile {
        &LEVELS[usize::from(self.0 - 1)]
    }

    /// Search depth in plies: 3 from tier 8, 2 from tier 4, else 1.
    pub fn depth(self) -> u8 {
        match self.0 {
            8.. => 3,
            4.. => 2,
            _ => 1,
        }
    }

    /// Chance of playing a random move instead of searching: `(10 - tier) / 15`.
    pub fn mistake_probability(self) -> f64 {
        (f64::from(10 - self.0) / 15.0).max(0.0)
    }
}

impl TryFrom<u8> for Tier {
    type Error = LevelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Tier::new(level)
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.0
    }
}

impl std::str::FromStr for Tier {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: u8 = s
            .trim()
            .parse()
            .map_err(|_| LevelError::NotANumber(s.to_string()))?;
        Tier::new(level)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().name)
    }
}

/// Display data for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProfile {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
}

pub const LEVELS: [LevelProfile; 10] = [
    LevelProfile { level: 1, name: "Vision 1", description: "Very Easy – Beginner" },
    LevelProfile { level: 2, name: "Vision 2", description: "Easy" },
    LevelProfile { level: 3, name: "Vision 3", description: "Novice" },
    LevelProfile { level: 4, name: "Vision 4", description: "Early Intermediate" },
    LevelProfile { level: 5, name: "Vision 5", description: "Intermediate" },
    LevelProfile { level: 6, name: "Vision 6", description: "Advanced Intermediate" },
    LevelProfile { level: 7, name: "Vision 7", description: "Experienced" },
    LevelProfile { level: 8, name: "Vision 8", description: "Expert" },
    LevelProfile { level: 9, name: "Vision 9", description: "Master" },
    LevelProfile { level: 10, name: "Vision 10", description: "Champion – Near-perfect" },
];

/// Why the policy chose to play a random move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RandomReason {
    /// Tier 1's up-front coin flip
    Beginner,
    /// The per-tier mistake draw
    Mistake,
}

/// What to do for one move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Plan {
    Random(RandomReason),
    Search { depth: u8 },
}

/// Decides between a random move and a search for `tier`.
///
/// Draws one number for tier 1's beginner check (tier 1 only), then one for
/// the mistake check.
pub fn plan<G: Rng + ?Sized>(tier: Tier, rng: &mut G) -> Plan {
    if tier == Tier::MIN && rng.gen::<f64>() < BEGINNER_RANDOM_RATE {
        return Plan::Random(RandomReason::Beginner);
    }
    let depth = tier.depth();
    if rng.gen::<f64>() < tier.mistake_probability() {
        return Plan::Random(RandomReason::Mistake);
    }
    Plan::Search { depth }
}

#[cfg(test)]
#[path = "level_tests.rs"]
mod level_tests;
