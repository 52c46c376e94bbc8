//! UCI command loop.
//!
//! Commands are read line by line; replies go to `out` and are flushed
//! after every command that answers. Unknown commands are ignored.

use std::io::{self, BufRead, Write};

use chess_core::{move_to_uci, set_position_from_uci, Engine, Game};
use tracing::{debug, warn};
use vision_engine::{Tier, VisionEngine};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct UciSession {
    engine: VisionEngine,
    game: Game,
}

impl UciSession {
    pub fn new(engine: VisionEngine) -> Self {
        Self {
            engine,
            game: Game::new(),
        }
    }

    pub fn engine(&self) -> &VisionEngine {
        &self.engine
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        for line in input.lines() {
            if self.handle(&line?, &mut out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(Flow::Continue);
        };
        debug!(line, "uci command");

        match command {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Level type spin default {} min {} max {}",
                    self.engine.tier().get(),
                    Tier::MIN.get(),
                    Tier::MAX.get()
                )?;
                writeln!(out, "option name Seed type string default <empty>")?;
                writeln!(out, "uciok")?;
                out.flush()?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
                out.flush()?;
            }
            "setoption" => match parse_setoption(&parts[1..]) {
                Some((name, value)) => {
                    if !self.engine.set_option(&name, &value) {
                        debug!(%name, %value, "option not applied");
                    }
                }
                None => warn!(line, "malformed setoption"),
            },
            "ucinewgame" => {
                self.game = Game::new();
                self.engine.new_game();
            }
            "position" => {
                if let Err(err) = set_position_from_uci(&mut self.game, &parts[1..]) {
                    warn!(%err, line, "position command rejected");
                }
            }
            "go" => {
                // Search limits are ignored; the tier fixes the depth.
                match self.engine.select_move(&mut self.game) {
                    Some(mv) => writeln!(out, "bestmove {}", move_to_uci(mv))?,
                    None => writeln!(out, "bestmove 0000")?,
                }
                out.flush()?;
            }
            "quit" => return Ok(Flow::Quit),
            _ => debug!(command, "ignoring unknown command"),
        }
        Ok(Flow::Continue)
    }
}

/// Splits `name <words...> [value <words...>]`; names and values may contain spaces.
fn parse_setoption(args: &[&str]) -> Option<(String, String)> {
    let (&first, rest) = args.split_first()?;
    if first != "name" {
        return None;
    }
    let split = rest.iter().position(|&t| t == "value").unwrap_or(rest.len());
    let name = rest[..split].join(" ");
    if name.is_empty() {
        return None;
    }
    let value = rest.get(split + 1..).map(|v| v.join(" ")).unwrap_or_default();
    Some((name, value))
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
