//! Card Czar - command line driver
//!
//! Lists the card catalog and plays bot games against the round engine.

use anyhow::{bail, Context};
use cah_engine::{
    core::PlayerSummary,
    game::{GameLoop, PlayerController, RandomController, VerbosityLevel, ZeroController},
    Table, TableConfig,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

/// Controller type for bots
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ControllerType {
    /// Always chooses the first legal action
    Zero,
    /// Makes random choices
    Random,
}

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "cah")]
#[command(about = "Card Czar - party card game round engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the decks in the card catalog
    Decks {
        /// Directory holding one subdirectory per deck
        #[arg(long, default_value = "test_decks")]
        decks_dir: PathBuf,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a complete game between bots
    Simulate {
        /// Directory holding one subdirectory per deck
        #[arg(long, default_value = "test_decks")]
        decks_dir: PathBuf,

        /// Number of bots at the table
        #[arg(long, default_value_t = 4)]
        players: usize,

        /// Rounds a bot must win to take the game
        #[arg(long, default_value_t = 5)]
        wins: u32,

        /// Bot type
        #[arg(long, value_enum, default_value = "random")]
        bots: ControllerType,

        /// Seed for shuffling and bot choices
        #[arg(long)]
        seed: Option<u64>,

        /// Verbosity level (silent/0, minimal/1, normal/2, verbose/3)
        #[arg(long, default_value = "normal")]
        verbosity: VerbosityArg,

        /// Print the final scores as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct DeckListing<'a> {
    name: &'a str,
    prompts: usize,
    answers: usize,
}

#[derive(Serialize)]
struct SimulationReport {
    winner: Option<String>,
    rounds_played: u32,
    scores: Vec<PlayerSummary>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decks { decks_dir, json } => run_decks(decks_dir, json).await?,
        Commands::Simulate {
            decks_dir,
            players,
            wins,
            bots,
            seed,
            verbosity,
            json,
        } => run_simulate(decks_dir, players, wins, bots, seed, verbosity.into(), json).await?,
    }

    Ok(())
}

async fn run_decks(decks_dir: PathBuf, json: bool) -> anyhow::Result<()> {
    let table = Table::open(&decks_dir, TableConfig::default())
        .await
        .with_context(|| format!("loading card catalog from {}", decks_dir.display()))?;

    table
        .with_coordinator(|coordinator| -> anyhow::Result<()> {
            let listing: Vec<DeckListing> = coordinator
                .catalog()
                .decks()
                .iter()
                .map(|deck| DeckListing {
                    name: deck.name.as_str(),
                    prompts: deck.prompt_cards.len(),
                    answers: deck.answer_cards.len(),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for deck in &listing {
                    println!(
                        "{:<24} {:>4} prompts {:>5} answers",
                        deck.name, deck.prompts, deck.answers
                    );
                }
            }
            Ok(())
        })
        .await
}

async fn run_simulate(
    decks_dir: PathBuf,
    players: usize,
    wins: u32,
    bots: ControllerType,
    seed: Option<u64>,
    verbosity: VerbosityLevel,
    json: bool,
) -> anyhow::Result<()> {
    if players < 2 {
        bail!("a game needs at least 2 players, got {players}");
    }

    let config = TableConfig {
        seed,
        ..TableConfig::default()
    };
    let table = Table::open(&decks_dir, config)
        .await
        .with_context(|| format!("loading card catalog from {}", decks_dir.display()))?;

    let mut controllers: Vec<Box<dyn PlayerController>> = Vec::with_capacity(players);
    for i in 0..players {
        let record = table
            .join_player(&format!("Bot {}", i + 1))
            .await
            .context("seating bots")?;
        let controller: Box<dyn PlayerController> = match (bots, seed) {
            (ControllerType::Zero, _) => Box::new(ZeroController::new(record.id, record.secret)),
            (ControllerType::Random, Some(seed)) => Box::new(RandomController::with_seed(
                record.id,
                record.secret,
                seed.wrapping_add(i as u64 + 1),
            )),
            (ControllerType::Random, None) => {
                Box::new(RandomController::new(record.id, record.secret))
            }
        };
        controllers.push(controller);
    }

    // Keep stdout clean for the JSON report
    let log_level = if json {
        VerbosityLevel::Silent
    } else {
        verbosity
    };
    let result = table
        .with_coordinator(|coordinator| {
            GameLoop::new(coordinator)
                .with_verbosity(log_level)
                .run_game(&mut controllers, wins)
        })
        .await
        .context("running bot game")?;

    let winner = result.winner.and_then(|id| {
        result
            .scores
            .iter()
            .find(|summary| summary.id == id)
            .map(|summary| summary.name.to_string())
    });

    if json {
        let report = SimulationReport {
            winner,
            rounds_played: result.rounds_played,
            scores: result.scores,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if verbosity > VerbosityLevel::Silent {
        println!("\n=== Final scores after {} rounds ===", result.rounds_played);
        for summary in &result.scores {
            println!("  {:<20} {}", summary.name.as_str(), summary.wins);
        }
    }

    Ok(())
}
