//! Volley club CLI
//!
//! Runs JSON club requests from a script or stdin, or prints a team summary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use volley_cli::{load_config, render_summary, run_script};
use volley_core::SharedClub;

#[derive(Parser)]
#[command(name = "volley")]
#[command(about = "Volleyball club management from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute JSON requests, one per line, and print one response per line
    Run {
        /// Request script (reads stdin when omitted)
        #[arg(long)]
        script: Option<PathBuf>,

        /// Club config JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Start from an empty club instead of the demo data
        #[arg(long, default_value = "false")]
        empty: bool,
    },

    /// Print a team's record, upcoming matches and player leaderboard
    Summary {
        /// Team id
        #[arg(long)]
        team_id: u64,

        /// Club config JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Start from an empty club instead of the demo data
        #[arg(long, default_value = "false")]
        empty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { script, config, empty } => {
            let club = SharedClub::with_config(load_config(config.as_deref(), empty)?);
            let mut stdout = io::stdout().lock();

            let stats = match script {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open script {}", path.display()))?;
                    run_script(&club, BufReader::new(file), &mut stdout)?
                }
                None => run_script(&club, io::stdin().lock(), &mut stdout)?,
            };

            eprintln!("✅ {} requests processed, {} failed", stats.processed, stats.failed);
        }

        Commands::Summary { team_id, config, empty } => {
            let club = SharedClub::with_config(load_config(config.as_deref(), empty)?);
            print!("{}", render_summary(&club, team_id)?);
        }
    }

    Ok(())
}
