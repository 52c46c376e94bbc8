//! Vision Chess Engine
//!
//! A leveled opponent: minimax with alpha-beta pruning over a material plus
//! pawn-structure evaluation, with ten tiers that trade search depth for
//! deliberate random moves.
//!
//! | Tier  | Depth | Random move chance                |
//! |-------|-------|-----------------------------------|
//! | 1     | 1     | 80% up front, then 9/15 of the rest |
//! | 2-3   | 1     | 8/15, 7/15                        |
//! | 4-7   | 2     | 6/15 .. 3/15                      |
//! | 8-10  | 3     | 2/15, 1/15, never                 |

mod eval;
mod level;
mod search;
mod select;

use chess_core::{Engine, Game, Move};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

pub use eval::{evaluate, evaluate_grid, pawn_bonus, piece_value, Score};
pub use level::{plan, LevelError, LevelProfile, Plan, RandomReason, Tier, BEGINNER_RANDOM_RATE, LEVELS};
pub use search::{alpha_beta, search, MoveGuard, SearchStats, NO_MOVE_SCORE, ROOT_BOUND};
pub use select::{select_move, select_move_with_report, MoveChoice, Selection};

/// Leveled engine with its own random source.
///
/// Seed it for reproducible games; unseeded engines draw from OS entropy.
#[derive(Debug, Clone)]
pub struct VisionEngine {
    tier: Tier,
    rng: StdRng,
    last: Option<MoveChoice>,
}

impl VisionEngine {
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            rng: StdRng::from_entropy(),
            last: None,
        }
    }

    pub fn with_seed(tier: Tier, seed: u64) -> Self {
        Self {
            tier,
            rng: StdRng::seed_from_u64(seed),
            last: None,
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn set_tier(&mut self, tier: Tier) {
        self.tier = tier;
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Details of the most recent decision.
    pub fn last_choice(&self) -> Option<&MoveChoice> {
        self.last.as_ref()
    }
}

impl Engine for VisionEngine {
    fn select_move(&mut self, game: &mut Game) -> Option<Move> {
        self.last = select_move_with_report(game, self.tier, &mut self.rng);
        match &self.last {
            Some(choice) => debug!(
                tier = self.tier.get(),
                mv = %choice.mv,
                selection = ?choice.selection,
                nodes = choice.stats.nodes,
                cutoffs = choice.stats.cutoffs,
                "move selected"
            ),
            None => debug!(tier = self.tier.get(), "no legal moves"),
        }
        self.last.map(|choice| choice.mv)
    }

    fn name(&self) -> String {
        self.tier.to_string()
    }

    fn new_game(&mut self) {
        self.last = None;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name.to_ascii_lowercase().as_str() {
            "level" => match value.parse::<Tier>() {
                Ok(tier) => {
                    self.set_tier(tier);
                    true
                }
                Err(err) => {
                    warn!(%err, "ignoring Level option");
                    false
                }
            },
            "seed" => match value.trim().parse::<u64>() {
                Ok(seed) => {
                    self.reseed(seed);
                    true
                }
                Err(_) => {
                    warn!(value, "ignoring Seed option");
                    false
                }
            },
            _ => false,
        }
    }
}
