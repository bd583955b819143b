//! series CLI - Command-line interface for the series tree
//!
//! This binary builds the tree of every way a first-to-N series can finish
//! and lets you browse it: as an expandable tree, as a grouped listing, as
//! summary statistics, or as JSON.

mod commands;
mod config;
mod explore;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{Expansion, Session};
use crate::config::{Flags, SeriesConfig};

#[derive(Parser)]
#[command(name = "series")]
#[command(version, about = "Every way a best-of-N series can finish, as a tree", long_about = None)]
struct Cli {
    /// Wins needed to take the series (default 4, best of seven)
    #[arg(long, global = true, allow_negative_numbers = true)]
    wins: Option<i64>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display name for side A
    #[arg(long, global = true)]
    team_a: Option<String>,

    /// Display name for side B
    #[arg(long, global = true)]
    team_b: Option<String>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tree, opening the first rows like a freshly opened window
    Tree {
        /// Open every row
        #[arg(long)]
        expand_all: bool,

        /// Open every row above this depth
        #[arg(long, conflicts_with = "expand_all")]
        depth: Option<usize>,

        /// Open the first N rows
        #[arg(long, conflicts_with_all = ["expand_all", "depth"])]
        rows: Option<usize>,
    },

    /// Print the subtree reached by a sequence of game winners, e.g. AAB
    Show {
        sequence: String,
    },

    /// List every sequence grouped by series length
    List,

    /// Print every node level by level, coloured by winner
    Diagram,

    /// Print summary statistics
    Stats {
        /// Check the counts against 2·C(L−1, n−1)
        #[arg(long)]
        verify: bool,
    },

    /// Write outcomes and statistics as JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Browse the tree interactively
    Explore,

    /// Print the usage guide
    Guide,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn resolve_config(cli: &Cli) -> Result<SeriesConfig> {
    let flags = Flags {
        wins: cli.wins,
        team_a: cli.team_a.clone(),
        team_b: cli.team_b.clone(),
        no_color: cli.no_color,
    };
    let config = SeriesConfig::resolve(cli.config.as_deref(), &flags)?;
    if !config.color {
        colored::control::set_override(false);
    }
    log::debug!("resolved configuration: {:?}", config);
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let session = Session::new(resolve_config(&cli)?)?;

    match cli.command {
        Commands::Tree {
            expand_all,
            depth,
            rows,
        } => {
            let expansion = Expansion {
                all: expand_all,
                depth,
                rows,
            };
            print!("{}", commands::tree(&session, expansion));
        }
        Commands::Show { sequence } => print!("{}", commands::show(&session, &sequence)?),
        Commands::List => print!("{}", commands::list(&session)),
        Commands::Diagram => print!("{}", commands::diagram(&session)),
        Commands::Stats { verify } => print!("{}", commands::summary(&session, verify)?),
        Commands::Export { output } => commands::export(&session, output.as_deref())?,
        Commands::Explore => explore::run(&session)?,
        Commands::Guide => print!("{}", commands::guide(&session)),
    }
    Ok(())
}
