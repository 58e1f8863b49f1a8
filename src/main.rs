#![warn(clippy::pedantic)]

use anyhow::Result;
use backendless::commands::handle_command;
use backendless::state::{State, StateOptions};
use backendless::{utils, CLI};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = State::new(StateOptions {
        override_project: cli.project,
        override_api_url: cli.server,
    })
    .await?;

    if let Err(error) = handle_command(cli.commands, state).await {
        log::error!("{:#}", error);
        std::process::exit(1);
    }

    Ok(())
}
