use anyhow::Result;
use clap::Parser;

use crate::bindings::users;
use crate::commands::auth::password_or_prompt;
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Change the email and password of the current user")]
pub struct Options {
    #[clap(help = "New email of the account")]
    pub email: String,
    #[clap(
        long = "password",
        help = "New password",
        long_help = "New password, prompted for (with confirmation) when omitted"
    )]
    pub password: Option<String>,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let password = password_or_prompt(options.password, true)?;

    users::update(&state.http, &options.email, &password)
        .await?
        .ensure_success()?;

    if state.ctx.update_user_email(&options.email) {
        state.ctx.save().await?;
    }

    log::info!("Updated account, the email is now {}", options.email);

    Ok(())
}
