//! Command-line interface for unirule
//!
//! Provides `init`, `generate`, and `platforms` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod generate;
mod init;
mod platforms;
mod utils;

/// Keep AI editor rules in one place and convert them per editor
#[derive(Parser)]
#[command(name = "unirule")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the rules directory and starter rule files
    Init(init::InitArgs),

    /// Convert the unified rules into an editor's native format
    Generate(generate::GenerateArgs),

    /// List supported editor platforms
    Platforms,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Init(args) => init::run(args),
        Commands::Generate(args) => generate::run(args),
        Commands::Platforms => platforms::run(),
    }
}
