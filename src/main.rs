use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use finledger::cli::{
    handle_convert_command, handle_demo_command, handle_inspect_command, ConvertArgs, DemoArgs,
    InspectArgs,
};
use finledger::config::Settings;
use finledger::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "finledger",
    version,
    about = "Personal finance ledger with JSON, CSV and YAML import/export",
    long_about = "finledger keeps accounts, categories and income/expense operations \
                  and moves them between JSON, CSV and YAML files without losing \
                  precision."
)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true, env = "FINLEDGER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a sample ledger and export it
    Demo(DemoArgs),

    /// Load a file and print its contents with reports
    Inspect(InspectArgs),

    /// Read a file and write it back in another format
    Convert(ConvertArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = Settings::load_or_default(cli.config.as_deref())
        .context("Failed to load settings")?;

    match cli.command {
        Commands::Demo(args) => handle_demo_command(&settings, args)?,
        Commands::Inspect(args) => handle_inspect_command(args)?,
        Commands::Convert(args) => handle_convert_command(&settings, args)?,
    }

    Ok(())
}
