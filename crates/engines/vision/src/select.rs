//! Root move selection for a tier.

use chess_core::{Move, RulesEngine};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::eval::Score;
use crate::level::{plan, Plan, RandomReason, Tier};
use crate::search::{alpha_beta, MoveGuard, SearchStats, NO_MOVE_SCORE, ROOT_BOUND};

/// How a move was picked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// Uniformly random legal move
    Random(RandomReason),
    /// Highest-scoring root move at `depth`
    Searched { depth: u8, score: Score },
    /// Every root move scored at or below the empty-node sentinel; the first
    /// legal move is played
    Fallback { depth: u8 },
}

/// The chosen move with the details of how it was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveChoice {
    pub mv: Move,
    pub selection: Selection,
    pub stats: SearchStats,
}

/// Picks a move for the side to move at `tier`, or `None` if there are no
/// legal moves.
pub fn select_move<R, G>(rules: &mut R, tier: Tier, rng: &mut G) -> Option<Move>
where
    R: RulesEngine + ?Sized,
    G: Rng + ?Sized,
{
    select_move_with_report(rules, tier, rng).map(|choice| choice.mv)
}

/// Same as [`select_move`], reporting how the move was chosen.
pub fn select_move_with_report<R, G>(rules: &mut R, tier: Tier, rng: &mut G) -> Option<MoveChoice>
where
    R: RulesEngine + ?Sized,
    G: Rng + ?Sized,
{
    let moves = rules.legal_moves();
    let first = *moves.first()?;

    let depth = match plan(tier, rng) {
        Plan::Random(reason) => {
            let mv = *moves.choose(rng).unwrap_or(&first);
            return Some(MoveChoice {
                mv,
                selection: Selection::Random(reason),
                stats: SearchStats::default(),
            });
        }
        Plan::Search { depth } => depth,
    };

    let mut stats = SearchStats::default();
    let mut best: Option<(Move, Score)> = None;
    let mut best_value = -NO_MOVE_SCORE;

    for mv in moves {
        // The opponent replies next, so the child is a minimizing node.
        let value = {
            let mut child = MoveGuard::new(rules, mv);
            alpha_beta(&mut *child, depth - 1, -ROOT_BOUND, ROOT_BOUND, false, &mut stats)
        };
        trace!(%mv, value, "root move scored");
        // Strict comparison: ties keep the earliest move.
        if value > best_value {
            best_value = value;
            best = Some((mv, value));
        }
    }

    let selection = match best {
        Some((_, score)) => Selection::Searched { depth, score },
        None => Selection::Fallback { depth },
    };
    Some(MoveChoice {
        mv: best.map_or(first, |(mv, _)| mv),
        selection,
        stats,
    })
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
