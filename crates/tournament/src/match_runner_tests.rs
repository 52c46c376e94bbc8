use super::*;
use chess_core::{parse_uci_move, Move};
use vision_engine::{Tier, VisionEngine};

/// Plays a fixed list of moves, then gives up.
struct Scripted {
    name: &'static str,
    moves: Vec<&'static str>,
    next: usize,
}

impl Scripted {
    fn new(name: &'static str, moves: &[&'static str]) -> Self {
        Self {
            name,
            moves: moves.to_vec(),
            next: 0,
        }
    }
}

impl Engine for Scripted {
    fn select_move(&mut self, game: &mut Game) -> Option<Move> {
        let txt = self.moves.get(self.next)?;
        self.next += 1;
        parse_uci_move(game.position(), txt)
    }

    fn name(&self) -> String {
        self.name.to_string()
    }

    fn new_game(&mut self) {
        self.next = 0;
    }
}

/// Always answers with a pawn jump that is never legal.
struct Cheater;

impl Engine for Cheater {
    fn select_move(&mut self, _game: &mut Game) -> Option<Move> {
        Some(Move::new(12, 36))
    }

    fn name(&self) -> String {
        "cheater".to_string()
    }
}

fn runner(num_games: u32, max_moves: u32) -> MatchRunner {
    MatchRunner::new(MatchConfig {
        num_games,
        max_moves,
        ..Default::default()
    })
}

#[test]
fn test_self_play() {
    let mut engine1 = VisionEngine::with_seed(Tier::new(2).unwrap(), 1);
    let mut engine2 = VisionEngine::with_seed(Tier::new(3).unwrap(), 2);

    let result = quick_match(&mut engine1, &mut engine2, 2, 40);

    assert_eq!(result.total_games(), 2);
    assert_eq!(result.games.len(), 2);
    assert_eq!(result.games[0].white, "Vision 2");
    assert_eq!(result.games[1].white, "Vision 3");
    for game in &result.games {
        assert!(game.moves.len() <= 40);
    }
}

#[test]
fn test_checkmate_scored_for_white() {
    let mut white = Scripted::new("white", &["e2e4", "f1c4", "d1h5", "h5f7"]);
    let mut black = Scripted::new("black", &["e7e5", "b8c6", "g8f6"]);

    let record = runner(1, 200).play_game(&mut white, &mut black);

    assert_eq!(record.result, GameResult::Win);
    assert_eq!(record.termination, Termination::Checkmate);
    assert_eq!(record.moves.len(), 7);
    assert_eq!(record.moves.last().map(String::as_str), Some("h5f7"));
}

#[test]
fn test_move_limit_is_a_draw() {
    let mut white = VisionEngine::with_seed(Tier::MIN, 5);
    let mut black = VisionEngine::with_seed(Tier::MIN, 6);

    // Too short for any mate
    let record = runner(1, 3).play_game(&mut white, &mut black);

    assert_eq!(record.result, GameResult::Draw);
    assert_eq!(record.termination, Termination::MoveLimit);
    assert_eq!(record.moves.len(), 3);
}

#[test]
fn test_finished_position_needs_no_moves() {
    let stalemate = Game::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    let mut white = Cheater;
    let mut black = Cheater;

    let record = runner(1, 200).play_from(stalemate, &mut white, &mut black);

    assert_eq!(record.result, GameResult::Draw);
    assert_eq!(record.termination, Termination::Stalemate);
    assert!(record.moves.is_empty());
}

#[test]
fn test_record_keeps_moves_played_before_the_runner() {
    let mut game = Game::new();
    let e4 = parse_uci_move(game.position(), "e2e4").unwrap();
    game.play(e4).unwrap();
    let mut white = Cheater;
    let mut black = Scripted::new("black", &["e7e5"]);

    let record = runner(1, 1).play_from(game, &mut white, &mut black);

    assert_eq!(record.termination, Termination::MoveLimit);
    assert_eq!(record.moves, vec!["e2e4".to_string(), "e7e5".to_string()]);
}

#[test]
fn test_illegal_move_forfeits() {
    let mut white = Scripted::new("white", &["g1f3"]);
    let mut black = Cheater;

    let record = runner(1, 200).play_game(&mut white, &mut black);

    assert_eq!(record.result, GameResult::Win);
    assert_eq!(record.termination, Termination::Forfeit);
    assert_eq!(record.moves, vec!["g1f3".to_string()]);
}

#[test]
fn test_alternating_colors_flip_results() {
    let mut engine1 = VisionEngine::with_seed(Tier::MIN, 9);
    // Has nothing to play, so it forfeits with either color
    let mut engine2 = Scripted::new("silent", &[]);

    let result = runner(2, 200).run_match(&mut engine1, &mut engine2);

    assert_eq!((result.wins, result.losses, result.draws), (2, 0, 0));
    // Records are scored for White
    assert_eq!(result.games[0].result, GameResult::Win);
    assert_eq!(result.games[1].result, GameResult::Loss);
    assert_eq!(result.games[1].white, "silent");
    assert_eq!(result.score(), 1.0);
}
