//! CLI frontend for Hearth rest automation.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hearth",
    about = "Hearth: overnight recovery for tabletop characters",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rest a party for the night and print the summary messages
    Rest {
        /// JSON file holding an array of character snapshots
        party: PathBuf,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Use the stamina variant (overrides the config file)
        #[arg(long)]
        stamina: bool,

        /// Rest configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Message catalog overrides (JSON object of key to template)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the created messages as JSON
        #[arg(long)]
        json: bool,

        /// Write the rested party to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decide the critical highlight for a rendered chat card
    Highlight {
        /// JSON file holding the chat card
        card: PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("HEARTH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rest {
            party,
            yes,
            stamina,
            config,
            catalog,
            json,
            output,
        } => commands::rest::run(&commands::rest::RestArgs {
            party: &party,
            yes,
            stamina,
            config: config.as_deref(),
            catalog: catalog.as_deref(),
            json,
            output: output.as_deref(),
        }),
        Commands::Highlight { card } => commands::highlight::run(&card),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
