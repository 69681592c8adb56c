//! module-maker CLI tool

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use module_maker::commands::{MakeCommand, StubsCommand};
use module_maker::{observability, ScaffoldConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "module-maker")]
#[command(version)]
#[command(about = "Scaffold modules for modular Laravel applications", long_about = None)]
struct Cli {
    /// Project root the module is generated into
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to `<root>/module-maker.toml`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a module (model, controller, routes, migration, views, components)
    Make(MakeCommand),
    /// Manage customised stubs
    Stubs {
        #[command(subcommand)]
        command: StubsCommand,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    let config = ScaffoldConfig::load(&cli.root, cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Make(command) => command.execute(config),
        Commands::Stubs { command } => {
            command.execute(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
