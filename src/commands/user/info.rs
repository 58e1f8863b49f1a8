use anyhow::Result;
use clap::Parser;

use crate::bindings::types::User;
use crate::bindings::users;
use crate::state::State;
use crate::store::Store;
use crate::utils::relative_time;

#[derive(Debug, Parser)]
#[clap(about = "Get information about the current user")]
pub struct Options {}

pub async fn handle(_options: Options, mut state: State) -> Result<()> {
    let user = users::read(&state.http)
        .await?
        .ensure_success()?
        .data_as::<User>()?;

    println!("You are logged in as `{}` ({})", user.username, user.email);
    println!("Account {} created {} ago", user.id, relative_time(user.created_at));

    if state.ctx.user.as_ref() != Some(&user) {
        state.ctx.user = Some(user);
        state.ctx.save().await?;
    }

    Ok(())
}
