mod commands;

use crate::commands::{round, rounds, table};
use clap::{Parser, Subcommand};
use colored::*;
use impostor_odds::odds::{EnumerationOptions, MAX_PLAYERS, MIN_PLAYERS};
use impostor_odds::reports::ReportResult;

#[derive(Parser)]
#[clap(about = "Odds of a lone impostor surviving every vote")]
struct Opts {
    /// Worker threads for parallel enumeration (defaults to one per core)
    #[clap(long, global = true)]
    threads: Option<usize>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print random and smart win probabilities for each game size.
    Table {
        /// Smallest game size
        #[clap(long, default_value_t = MIN_PLAYERS)]
        min: usize,
        /// Largest game size
        #[clap(long, default_value_t = MAX_PLAYERS)]
        max: usize,
        /// Emit JSON instead of a text table
        #[clap(long)]
        json: bool,
        /// Shard each round's enumeration across threads
        #[clap(long)]
        parallel: bool,
        /// Report per-round progress on stderr
        #[clap(long)]
        verbose: bool,
    },
    /// Break down the vote outcomes of a single round.
    Round {
        /// Players alive when the vote happens
        players_left: usize,
        /// Number of decoded combinations to list
        #[clap(long, default_value_t = 0)]
        show: u64,
        #[clap(long)]
        parallel: bool,
    },
    /// Print the per-round survival chain for a game.
    Rounds {
        /// Players at the start of the game
        players: usize,
        #[clap(long)]
        parallel: bool,
        #[clap(long)]
        verbose: bool,
    },
}

fn main() {
    let opts = Opts::parse();

    if let Some(threads) = opts.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            eprintln!("{} {}", "❌ Thread pool setup failed:".red(), e);
            std::process::exit(1);
        }
    }

    if let Err(e) = run(opts.command) {
        eprintln!("{} {}", "❌".red(), e.to_string().red());
        std::process::exit(1);
    }
}

fn run(command: Command) -> ReportResult<()> {
    match command {
        Command::Table {
            min,
            max,
            json,
            parallel,
            verbose,
        } => table(min, max, json, &EnumerationOptions { parallel, verbose }),
        Command::Round {
            players_left,
            show,
            parallel,
        } => round(
            players_left,
            show,
            &EnumerationOptions {
                parallel,
                ..Default::default()
            },
        ),
        Command::Rounds {
            players,
            parallel,
            verbose,
        } => rounds(players, &EnumerationOptions { parallel, verbose }),
    }
}
