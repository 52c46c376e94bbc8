use super::*;
use chess_core::Game;
use rand::rngs::mock::StepRng;

/// Every draw is 0.0: all random branches fire (where their probability is > 0).
fn always_low() -> StepRng {
    StepRng::new(0, 0)
}

/// Every draw is just below 1.0: no random branch ever fires.
fn always_high() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

#[test]
fn test_equal_scores_keep_first_move() {
    // Bare kings: every king move evaluates to zero at depth 1
    let mut game = Game::from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let first = game.legal_moves()[0];
    let tier = Tier::new(2).unwrap();

    let choice = select_move_with_report(&mut game, tier, &mut always_high()).unwrap();
    assert_eq!(choice.mv, first);
    assert_eq!(choice.selection, Selection::Searched { depth: 1, score: 0.0 });
}

#[test]
fn test_fallback_to_first_move_when_every_line_loses() {
    // Whatever Black plays, Rh1 mates
    let mut game = Game::from_fen("7k/p4K2/8/8/8/8/8/6R1 b - - 0 1").unwrap();
    let first = game.legal_moves()[0];

    let choice = select_move_with_report(&mut game, Tier::MAX, &mut always_high()).unwrap();
    assert_eq!(choice.mv, first);
    assert_eq!(choice.selection, Selection::Fallback { depth: 3 });
}

#[test]
fn test_random_selection_skips_search() {
    let mut game = Game::new();
    let choice = select_move_with_report(&mut game, Tier::MIN, &mut always_low()).unwrap();
    assert_eq!(choice.selection, Selection::Random(RandomReason::Beginner));
    assert_eq!(choice.stats, SearchStats::default());
    assert!(game.legal_moves().contains(&choice.mv));
}

#[test]
fn test_mistake_selection() {
    let mut game = Game::new();
    let tier = Tier::new(5).unwrap();
    let choice = select_move_with_report(&mut game, tier, &mut always_low()).unwrap();
    assert_eq!(choice.selection, Selection::Random(RandomReason::Mistake));
}

#[test]
fn test_search_counts_nodes() {
    let mut game = Game::new();
    let tier = Tier::new(4).unwrap();
    let choice = select_move_with_report(&mut game, tier, &mut always_high()).unwrap();
    assert!(matches!(choice.selection, Selection::Searched { depth: 2, .. }));
    // 20 root children, each expanding 20 replies at most
    assert!(choice.stats.nodes >= 20);
    assert!(choice.stats.leaves <= 400);
    assert_eq!(game.depth(), 0);
}
