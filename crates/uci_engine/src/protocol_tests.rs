use super::*;
use std::io::Cursor;

fn session(level: u8) -> UciSession {
    UciSession::new(VisionEngine::with_seed(Tier::new(level).unwrap(), 17))
}

fn run_script(session: &mut UciSession, script: &str) -> String {
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn handshake_advertises_options() {
    let out = run_script(&mut session(4), "uci\nisready\n");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id name Vision 4",
            "id author Vision-chess",
            "option name Level type spin default 4 min 1 max 10",
            "option name Seed type string default <empty>",
            "uciok",
            "readyok",
        ]
    );
}

#[test]
fn go_answers_a_legal_bestmove() {
    let mut s = session(5);
    let out = run_script(&mut s, "position startpos moves e2e4 e7e5\ngo depth 9\n");
    let reply = out.trim().strip_prefix("bestmove ").unwrap();
    let legal: Vec<String> = s.game().legal_moves().into_iter().map(move_to_uci).collect();
    assert!(legal.iter().any(|m| m == reply), "{reply}");
    assert_eq!(s.game().depth(), 2);
}

#[test]
fn go_without_moves_answers_null_move() {
    let out = run_script(
        &mut session(10),
        "position fen k7/8/1Q6/8/8/8/8/1K6 b - - 0 1\ngo\n",
    );
    assert_eq!(out, "bestmove 0000\n");
}

#[test]
fn setoption_changes_level() {
    let mut s = session(1);
    run_script(&mut s, "setoption name Level value 8\nsetoption name Level value 42\n");
    assert_eq!(s.engine().tier().get(), 8);

    run_script(&mut s, "setoption name Seed value 99\nsetoption garbage\n");
    assert_eq!(s.engine().tier().get(), 8);
}

#[test]
fn rejected_position_keeps_the_game() {
    let mut s = session(3);
    run_script(&mut s, "position startpos moves e2e4\nposition startpos moves e2e5\n");
    assert_eq!(s.game().depth(), 1);
}

#[test]
fn quit_stops_the_loop() {
    let mut s = session(2);
    let out = run_script(&mut s, "isready\nquit\nisready\n");
    assert_eq!(out, "readyok\n");
}

#[test]
fn ucinewgame_resets_position() {
    let mut s = session(2);
    run_script(&mut s, "position startpos moves d2d4 d7d5\nbanana\n\nucinewgame\n");
    assert_eq!(s.game().depth(), 0);
}

#[test]
fn setoption_parsing() {
    assert_eq!(
        parse_setoption(&["name", "Level", "value", "3"]),
        Some(("Level".to_string(), "3".to_string()))
    );
    assert_eq!(
        parse_setoption(&["name", "Clear", "Hash"]),
        Some(("Clear Hash".to_string(), String::new()))
    );
    assert_eq!(parse_setoption(&["name", "value", "3"]), None);
    assert_eq!(parse_setoption(&["Level", "3"]), None);
    assert_eq!(parse_setoption(&[]), None);
}
