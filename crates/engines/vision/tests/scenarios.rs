//! End-to-end move selection scenarios across tiers.

use chess_core::{parse_uci_move, Game, Move};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vision_engine::{select_move, select_move_with_report, Selection, Tier};

/// A random source whose draws never fall under any mistake threshold.
fn steady() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn uci(game: &Game, txt: &str) -> Move {
    parse_uci_move(game.position(), txt).unwrap()
}

#[test]
fn no_legal_moves_yields_none_at_every_tier() {
    let terminal = [
        // Checkmate
        "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1",
        // Stalemate
        "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1",
    ];
    let mut rng = StdRng::seed_from_u64(3);
    for fen in terminal {
        let mut game = Game::from_fen(fen).unwrap();
        for tier in Tier::all() {
            assert_eq!(select_move(&mut game, tier, &mut rng), None, "{fen} at {tier}");
        }
    }
}

#[test]
fn top_tier_from_start_returns_an_opening_move() {
    let mut game = Game::new();
    let before = game.position().clone();
    let legal = game.legal_moves();
    assert_eq!(legal.len(), 20);

    let mut rng = StdRng::seed_from_u64(10);
    let choice = select_move_with_report(&mut game, Tier::MAX, &mut rng).unwrap();

    assert!(legal.contains(&choice.mv));
    assert!(matches!(choice.selection, Selection::Searched { depth: 3, .. }));
    assert_eq!(game.position(), &before);
    assert_eq!(game.depth(), 0);
}

#[test]
fn single_legal_move_is_always_chosen() {
    // Black king on a8 can only step to a7
    let mut game = Game::from_fen("k7/2K5/8/8/8/8/8/8 b - - 0 1").unwrap();
    let only = game.legal_moves();
    assert_eq!(only.len(), 1);

    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        for tier in Tier::all() {
            assert_eq!(select_move(&mut game, tier, &mut rng), Some(only[0]));
        }
    }
}

#[test]
fn mating_capture_is_found_at_every_tier() {
    // Rxd1 wins the queen and mates on the back rank
    let mut game = Game::from_fen("3r2k1/5ppp/8/8/8/8/5PPP/3Q2K1 b - - 0 1").unwrap();
    let mate = uci(&game, "d8d1");

    for tier in Tier::all() {
        assert_eq!(
            select_move(&mut game, tier, &mut steady()),
            Some(mate),
            "at {tier}"
        );
    }
}

#[test]
fn quiet_mate_is_found_when_searching_two_plies_or_more() {
    // Rd8 is mate; no other move wins material
    let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1").unwrap();
    let mate = uci(&game, "d1d8");

    for tier in Tier::all().filter(|t| t.depth() >= 2) {
        let choice = select_move_with_report(&mut game, tier, &mut steady()).unwrap();
        assert_eq!(choice.mv, mate, "at {tier}");
        assert!(matches!(
            choice.selection,
            Selection::Searched { score, .. } if score == vision_engine::NO_MOVE_SCORE
        ));
    }
}

#[test]
fn beginner_plays_mostly_random_moves() {
    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(77);
    let samples = 500;
    let random = (0..samples)
        .filter_map(|_| select_move_with_report(&mut game, Tier::MIN, &mut rng))
        .filter(|c| matches!(c.selection, Selection::Random(_)))
        .count();
    assert!(random * 10 >= samples * 8, "{random} of {samples} were random");
}

#[test]
fn repeated_requests_are_reproducible() {
    let mut game = Game::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
        .unwrap();
    let tier = Tier::new(7).unwrap();
    let first = select_move(&mut game, tier, &mut steady());
    let second = select_move(&mut game, tier, &mut steady());
    assert!(first.is_some());
    assert_eq!(first, second);
}
