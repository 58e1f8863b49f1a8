use anyhow::{ensure, Result};
use clap::Parser;

use super::util::password_or_prompt;
use crate::bindings::types::User;
use crate::bindings::{authentication, users};
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Login to Backendless")]
pub struct Options {
    #[clap(help = "Email of the account")]
    pub email: String,
    #[clap(
        long = "password",
        help = "Password",
        long_help = "Password, prompted for when omitted"
    )]
    pub password: Option<String>,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let password = password_or_prompt(options.password, false)?;

    let response = authentication::login(&state.http, &options.email, &password).await?;

    ensure!(response.status == 200, "Invalid username or password");

    // the session cookie is set now, keep the account around
    let user = users::read(&state.http)
        .await?
        .ensure_success()?
        .data_as::<User>()?;

    if state.ctx.user.as_ref().map(|u| &u.id) != Some(&user.id) {
        state.ctx.default_project = None;
    }

    log::info!("Logged in as: `{}` ({})", user.username, user.email);

    state.ctx.user = Some(user);
    state.ctx.save().await?;

    Ok(())
}
