//! CLI frontend for the Showdown at-bat engine.

mod autopilot;
mod commands;
mod demo;
mod linescore;
mod team;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use autopilot::AutoplayConfig;

#[derive(Parser)]
#[command(
    name = "showdown",
    about = "Showdown: dice-driven baseball, one at-bat at a time",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine rolls and resolutions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full match with both sides on autopilot
    Play {
        /// RNG seed for the dice
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Home team file (default: built-in demo team)
        #[arg(long)]
        home: Option<PathBuf>,

        /// Away team file (default: built-in demo team)
        #[arg(long)]
        away: Option<PathBuf>,

        /// Stop after this many commands if the game has not ended
        #[arg(long, default_value = "5000")]
        max_plays: usize,

        /// Print the stored turns as JSON instead of the play-by-play
        #[arg(long)]
        json: bool,
    },

    /// Validate a team file
    Check {
        /// Team file (JSON)
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            seed,
            home,
            away,
            max_plays,
            json,
        } => {
            let config = AutoplayConfig::default()
                .with_seed(seed)
                .with_max_plays(max_plays);
            commands::play::run(home.as_deref(), away.as_deref(), &config, json)
        }
        Commands::Check { file } => commands::check::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
