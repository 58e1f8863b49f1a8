mod create;
mod delete;
mod info;
mod list;
mod upload;
pub mod util;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "new", alias = "create", alias = "deploy")]
    Create(create::Options),
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    Info(info::Options),
    #[clap(name = "upload", alias = "static")]
    Upload(upload::Options),
    #[clap(name = "rm", alias = "delete")]
    Delete(delete::Options),
    #[clap(name = "validate", alias = "check")]
    Validate(validate::Options),
}

#[derive(Debug, Parser)]
#[clap(
    name = "deployments",
    about = "Interact with the deployments of a project"
)]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    // validation works offline
    if !matches!(options.commands, Commands::Validate(_)) {
        state.ensure_logged_in()?;
    }

    match options.commands {
        Commands::Create(options) => create::handle(options, state).await,
        Commands::List(options) => list::handle(options, state).await,
        Commands::Info(options) => info::handle(options, state).await,
        Commands::Upload(options) => upload::handle(options, state).await,
        Commands::Delete(options) => delete::handle(options, state).await,
        Commands::Validate(options) => validate::handle(options).await,
    }
}
