use anyhow::{ensure, Result};
use clap::Parser;

use super::util::password_or_prompt;
use crate::bindings::authentication;
use crate::config::EXEC_NAME;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Create a Backendless account")]
pub struct Options {
    #[clap(help = "Email of the account")]
    pub email: String,
    #[clap(help = "Username of the account")]
    pub username: String,
    #[clap(
        long = "password",
        help = "Password",
        long_help = "Password, prompted for (with confirmation) when omitted"
    )]
    pub password: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let password = password_or_prompt(options.password, true)?;

    let response =
        authentication::register(&state.http, &options.email, &options.username, &password)
            .await?;

    ensure!(
        response.status == 200,
        "Registration failure: {}",
        response.reason().unwrap_or("unknown reason")
    );

    log::info!(
        "Successfully registered `{}`, you may now login with `{} auth login {}`",
        options.username,
        EXEC_NAME,
        options.email
    );

    Ok(())
}
