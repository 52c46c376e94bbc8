//! Fixed-depth minimax with alpha-beta pruning.

use std::ops::{Deref, DerefMut};

use chess_core::{Move, RulesEngine};
use tracing::error;

use crate::eval::{evaluate, Score};

/// Best-so-far value before any move has been searched.
pub const NO_MOVE_SCORE: Score = 9999.0;

/// Root search window.
pub const ROOT_BOUND: Score = 10000.0;

/// Counters collected while searching. They never affect the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, including leaves
    pub nodes: u64,
    /// Leaf evaluations
    pub leaves: u64,
    /// Sibling loops cut short by a bound
    pub cutoffs: u64,
}

/// A move applied for the lifetime of the guard.
///
/// Dropping the guard undoes the move, so every way out of a search frame
/// (normal return, cutoff, panic unwinding) leaves the position restored.
pub struct MoveGuard<'a, R: RulesEngine + ?Sized> {
    rules: &'a mut R,
}

impl<'a, R: RulesEngine + ?Sized> MoveGuard<'a, R> {
    pub fn new(rules: &'a mut R, mv: Move) -> Self {
        rules.apply(mv);
        Self { rules }
    }
}

impl<R: RulesEngine + ?Sized> Deref for MoveGuard<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        &*self.rules
    }
}

impl<R: RulesEngine + ?Sized> DerefMut for MoveGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        &mut *self.rules
    }
}

impl<R: RulesEngine + ?Sized> Drop for MoveGuard<'_, R> {
    fn drop(&mut self) {
        if let Err(err) = self.rules.undo() {
            error!(%err, "move guard found nothing to undo");
        }
    }
}

/// Searches `depth` plies below the current position.
///
/// Leaves return the negated White-perspective evaluation. A node with no
/// legal moves returns its starting sentinel (`-9999` when maximizing,
/// `+9999` when minimizing) unchanged.
pub fn search<R: RulesEngine + ?Sized>(
    rules: &mut R,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> Score {
    let mut stats = SearchStats::default();
    alpha_beta(rules, depth, alpha, beta, maximizing, &mut stats)
}

/// Same as [`search`], accumulating counters into `stats`.
pub fn alpha_beta<R: RulesEngine + ?Sized>(
    rules: &mut R,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;

    if depth == 0 {
        stats.leaves += 1;
        return -evaluate(&*rules);
    }

    let moves = rules.legal_moves();

    if maximizing {
        let mut best = -NO_MOVE_SCORE;
        for mv in moves {
            let value = {
                let mut child = MoveGuard::new(rules, mv);
                alpha_beta(&mut *child, depth - 1, alpha, beta, false, stats)
            };
            best = best.max(value);
            alpha = alpha.max(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = NO_MOVE_SCORE;
        for mv in moves {
            let value = {
                let mut child = MoveGuard::new(rules, mv);
                alpha_beta(&mut *child, depth - 1, alpha, beta, true, stats)
            };
            best = best.min(value);
            beta = beta.min(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
