mod commands;
mod input;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::TermOverrides;

#[derive(Parser)]
#[command(name = "coursecal")]
#[command(about = "Turn a course schedule into a recurring-event calendar for the term")]
struct Cli {
    /// Config file (defaults to ~/.config/coursecal/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log parser and builder details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the term calendar from a JSON list of courses
    Generate {
        /// JSON file with the courses ("-" for stdin)
        input: PathBuf,

        #[command(flatten)]
        term: TermOverrides,
    },
    /// List the events of a generated .ics file
    Inspect {
        /// Calendar file to read
        file: PathBuf,
    },
    /// Write a config file
    Init {
        #[command(flatten)]
        term: TermOverrides,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Generate { input, term } => commands::generate::run(&input, config, term),
        Commands::Inspect { file } => commands::inspect::run(&file),
        Commands::Init { term, force } => commands::init::run(config, term, force),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
