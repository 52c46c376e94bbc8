//! `vision`: UCI front end and self-play driver.
//!
//! ```bash
//! vision                      # speak UCI on stdin/stdout
//! vision selfplay --white-level 2 --black-level 9 --games 20 --seed 1 --out run.json
//! ```
//!
//! Logs go to stderr so they never mix with UCI replies.

mod config;
mod protocol;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chess_core::Engine;
use clap::{Args, Parser, Subcommand};
use tournament::{MatchConfig, MatchRunner, TournamentConfig, TournamentResults};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vision_engine::{Tier, VisionEngine};

use config::VisionConfig;
use protocol::UciSession;

#[derive(Debug, Parser)]
#[command(name = "vision", version, about = "Leveled minimax chess engine")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Speak UCI on stdin/stdout (default)
    Uci,
    /// Play two tiers against each other and report the score
    Selfplay(SelfPlayArgs),
}

#[derive(Debug, Args)]
struct SelfPlayArgs {
    #[arg(long, value_parser = parse_tier)]
    white_level: Tier,
    #[arg(long, value_parser = parse_tier)]
    black_level: Tier,
    /// Defaults to `selfplay.games` from the config
    #[arg(long)]
    games: Option<u32>,
    /// Defaults to `selfplay.max_moves` from the config
    #[arg(long)]
    max_moves: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Swap colors after every game
    #[arg(long)]
    alternate: bool,
    /// Write results as JSON
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_tier(s: &str) -> Result<Tier, String> {
    s.parse::<Tier>().map_err(|e| e.to_string())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn engine_for(tier: Tier, seed: Option<u64>) -> VisionEngine {
    match seed {
        Some(seed) => VisionEngine::with_seed(tier, seed),
        None => VisionEngine::new(tier),
    }
}

fn run_uci(config: &VisionConfig) -> anyhow::Result<()> {
    let engine = engine_for(config.default_level, config.seed);
    info!(level = engine.tier().get(), "starting UCI session");
    let mut session = UciSession::new(engine);
    session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("UCI session I/O failed")
}

fn run_selfplay(config: &VisionConfig, args: SelfPlayArgs) -> anyhow::Result<()> {
    let seed = args.seed.or(config.seed);
    let match_config = MatchConfig {
        num_games: args.games.unwrap_or(config.selfplay.games),
        max_moves: args.max_moves.unwrap_or(config.selfplay.max_moves),
        alternate_colors: args.alternate,
    };

    let mut white = engine_for(args.white_level, seed);
    let mut black = engine_for(args.black_level, seed.map(|s| s.wrapping_add(1)));
    let (white_name, black_name) = (white.name(), black.name());
    // Equal tiers share a name; keep the table readable
    let black_label = if white_name == black_name {
        format!("{black_name} (b)")
    } else {
        black_name
    };

    let mut results = TournamentResults::new(
        &format!("{white_name} vs {black_label}"),
        vec![white_name.clone(), black_label.clone()],
        TournamentConfig {
            games_per_match: match_config.num_games,
            max_moves_per_game: match_config.max_moves,
            seed,
        },
    );

    info!(
        white = %white_name,
        black = %black_label,
        games = match_config.num_games,
        "starting self-play"
    );
    let outcome = MatchRunner::new(match_config).run_match(&mut white, &mut black);
    results.add_match(&white_name, &black_label, outcome);

    println!("{}", results.generate_report());

    if let Some(path) = &args.out {
        results
            .save(path)
            .with_context(|| format!("failed to save results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => VisionConfig::load(path)?,
        None => VisionConfig::default(),
    };
    init_tracing(&config.log_filter);

    match cli.command.unwrap_or(Command::Uci) {
        Command::Uci => run_uci(&config),
        Command::Selfplay(args) => run_selfplay(&config, args),
    }
}
