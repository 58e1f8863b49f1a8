pub mod login;
pub mod logout;
pub mod register;
mod util;

pub use self::util::password_or_prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "register", alias = "signup")]
    Register(register::Options),
    Login(login::Options),
    Logout(logout::Options),
}

#[derive(Debug, Parser)]
#[clap(name = "auth", about = "Authenticate with Backendless")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::Register(options) => register::handle(options, state).await,
        Commands::Login(options) => login::handle(options, state).await,
        Commands::Logout(options) => logout::handle(options, state).await,
    }
}
