use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::{handle_inspect_commands, handle_pipeline_commands};
use services::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    if handle_pipeline_commands(&cli)? {
        return Ok(());
    }
    handle_inspect_commands(&cli)?;
    Ok(())
}
