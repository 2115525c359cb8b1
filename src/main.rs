//! OSRS Items - builds the item guessing game dataset
//!
//! `generate` combines items-complete.json with live GE prices and verified
//! icons, `patch-slots` refreshes equipment slots in a generated file, and
//! `play` runs a round of the guessing game in the terminal.

use clap::{Parser, Subcommand};
use osrs_items::config::{self, Config};
use osrs_items::game::{play_round, Game};
use osrs_items::{artifact, run_generate, run_patch};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// OSRS item dataset builder
#[derive(Parser, Debug)]
#[command(name = "osrs_items")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to items-complete.json
    #[arg(long, global = true, default_value = config::DEFAULT_ITEMS_COMPLETE)]
    items_complete: PathBuf,

    /// User-Agent sent to the price API (include contact details)
    #[arg(
        long,
        global = true,
        env = "OSRS_ITEMS_USER_AGENT",
        default_value = config::DEFAULT_USER_AGENT
    )]
    user_agent: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the game items file from items-complete.json, GE prices and icons
    Generate {
        /// Where to write the game items
        #[arg(short, long, default_value = config::DEFAULT_GAME_ITEMS)]
        output: PathBuf,

        /// Real-time latest prices endpoint
        #[arg(long, default_value = config::GE_LATEST_URL)]
        prices_url: String,

        /// Icon URL template, `{id}` is replaced by the item ID
        #[arg(long, default_value = config::ICON_URL_TEMPLATE)]
        icon_template: String,

        /// Maximum number of icon checks in flight
        #[arg(long, default_value_t = 8)]
        probe_concurrency: usize,
    },
    /// Recompute equipment slots and write a patched copy of the game items
    PatchSlots {
        /// Previously generated game items
        #[arg(short, long, default_value = config::DEFAULT_GAME_ITEMS)]
        input: PathBuf,

        /// Where to write the patched copy (must differ from --input)
        #[arg(short, long, default_value = config::DEFAULT_PATCHED_ITEMS)]
        output: PathBuf,
    },
    /// Play one round of the item guessing game
    Play {
        /// Game items file to pick the answer from
        #[arg(short, long, default_value = config::DEFAULT_GAME_ITEMS)]
        input: PathBuf,

        /// Seed for picking the answer (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = Config {
        items_complete_path: args.items_complete,
        user_agent: args.user_agent,
        ..Config::default()
    };

    match args.command {
        Command::Generate {
            output,
            prices_url,
            icon_template,
            probe_concurrency,
        } => {
            config.game_items_path = output;
            config.prices_url = prices_url;
            config.icon_url_template = icon_template;
            config.probe_concurrency = probe_concurrency;

            match run_generate(&config).await {
                Ok(items) => log::info!("Generated {} game items.", items.len()),
                Err(e) => {
                    log::error!("Generate failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::PatchSlots { input, output } => {
            config.game_items_path = input;
            config.patched_items_path = output;

            match run_patch(&config) {
                Ok(report) => log::info!(
                    "Patch completed: {} updated, {} missing.",
                    report.updated,
                    report.missing
                ),
                Err(e) => {
                    log::error!("Patch failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Play { input, seed } => {
            if let Err(e) = play(&input, seed) {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
    }
}

fn play(input: &std::path::Path, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let items = artifact::read_game_items(input, "Run the generate job once first.")?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(&items, &mut rng)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    play_round(&mut game, &items, stdin.lock(), &mut stdout)?;
    Ok(())
}
