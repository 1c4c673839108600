//! Arena runner
//!
//! Loads two team files and plays them against each other with the
//! automated decision policy.
//!
//! Run with: cargo run -p tussle-arena -- demos/blaine.json demos/misty.json --seed 7

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tussle_battle::{AutoInput, BattleConfig, BattleLog, BattleSession, Side, TracingLog};
use tussle_team::{MoveDex, TeamSpec};

/// Play an automated battle between two team files
#[derive(Parser, Debug)]
#[command(name = "tussle-arena")]
#[command(about = "Play an automated battle between two JSON team files")]
struct Args {
    /// Team that moves first
    first: PathBuf,

    /// Team that moves second
    second: PathBuf,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Turns to play before calling the battle unfinished
    #[arg(long, default_value_t = 500)]
    max_turns: u32,

    /// TOML file overriding battle tunables; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

/// What a finished run looked like
#[derive(Debug)]
struct Report {
    seed: u64,
    turns: u32,
    winner: Option<Side>,
    history: Vec<String>,
    result: String,
}

fn parse_config(text: &str) -> Result<BattleConfig> {
    let config: BattleConfig = toml::from_str(text)?;
    if let Some(field) = config.non_finite_field() {
        anyhow::bail!("{} must be a finite number", field);
    }
    Ok(config)
}

fn load_config(path: Option<&Path>) -> Result<BattleConfig> {
    let Some(path) = path else {
        return Ok(BattleConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn run(args: &Args, log: Box<dyn BattleLog>) -> Result<Report> {
    let config = load_config(args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(rand::random);

    // One dex for both teams so same-named moves are shared
    let mut dex = MoveDex::new();
    let mut first = TeamSpec::from_path(&args.first)
        .and_then(|spec| spec.build(&mut dex))
        .with_context(|| format!("Failed to load team {}", args.first.display()))?;
    let mut second = TeamSpec::from_path(&args.second)
        .and_then(|spec| spec.build(&mut dex))
        .with_context(|| format!("Failed to load team {}", args.second.display()))?;

    let rng = ChaCha8Rng::seed_from_u64(seed);
    let mut battle = BattleSession::with_config(&mut first, &mut second, config, rng, log)
        .context("Failed to start battle")?;

    let winner = battle.run(&mut AutoInput::new(), args.max_turns)?;

    Ok(Report {
        seed,
        turns: battle.turn(),
        winner,
        history: battle.history().map(str::to_string).collect(),
        result: battle.determine_battle_result(),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let report = run(&args, Box::new(TracingLog))?;

    tracing::info!(seed = report.seed, turns = report.turns, "Battle finished");

    println!("Last actions:");
    for entry in &report.history {
        println!("  {}", entry);
    }
    println!("{}", report.result);
    if report.winner.is_none() {
        println!("(no winner after {} turns)", report.turns);
    }

    Ok(())
}
