use anyhow::Result;
use clap::Parser;

use crate::bindings::authentication;
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Logout the current user")]
pub struct Options {}

pub async fn handle(_options: Options, mut state: State) -> Result<()> {
    state.ensure_logged_in()?;

    let response = authentication::logout(&state.http).await?;

    if !response.is_success() {
        log::warn!(
            "The server did not end the session: {}",
            response.reason().unwrap_or("unknown reason")
        );
    }

    // clear all local state, the saved cookies are dropped after the command
    state.ctx.user = None;
    state.ctx.default_project = None;
    state.ctx.save().await?;

    log::info!("You have been logged out");

    Ok(())
}
