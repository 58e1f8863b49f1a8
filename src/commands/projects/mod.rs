mod create;
mod delete;
mod info;
mod list;
mod switch;
mod update;
pub mod util;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "new", alias = "create")]
    Create(create::Options),
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    Info(info::Options),
    Update(update::Options),
    Switch(switch::Options),
    #[clap(name = "rm", alias = "delete")]
    Delete(delete::Options),
}

#[derive(Debug, Parser)]
#[clap(name = "projects", about = "Interact with projects")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    state.ensure_logged_in()?;

    match options.commands {
        Commands::Create(options) => create::handle(options, state).await,
        Commands::List(options) => list::handle(options, state).await,
        Commands::Info(options) => info::handle(options, state).await,
        Commands::Update(options) => update::handle(options, state).await,
        Commands::Switch(options) => switch::handle(options, state).await,
        Commands::Delete(options) => delete::handle(options, state).await,
    }
}
