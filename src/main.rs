//! Termo CLI - delivery-term form tool
//!
//! Usage: termo [COMMAND]
//!
//! Commands:
//!   deadline  Compute the delivery date from a start date and day count
//!   generate  Validate the form and render the printable delivery term
//!   validate  Check the form fields without rendering
//!
//! Without a command, opens the interactive form.

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = termo::Config::load_or_default(cli.config.as_deref(), &cwd)?;
    let state_dir = termo::state::state_dir(&cwd);

    match cli.command {
        Some(Commands::Deadline { start, days }) => {
            commands::deadline::cmd_deadline(start.as_deref(), days, &config, cli.json)
        }
        Some(Commands::Generate { fields, fresh, out }) => {
            commands::generate::cmd_generate(&fields, fresh, &out, &config, &state_dir, cli.json)
        }
        Some(Commands::Validate { fields, fresh }) => {
            commands::validate::cmd_validate(&fields, fresh, &config, &state_dir, cli.json)
        }
        None => commands::interactive::cmd_interactive(&config, &state_dir, cli.json),
    }
}
