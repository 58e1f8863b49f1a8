use anyhow::{ensure, Result};
use clap::Parser;

use crate::bindings::users;
use crate::state::State;
use crate::store::context::Context;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Delete the current user and everything it owns")]
pub struct Options {
    #[clap(long = "no-confirm", help = "Skip confirmation")]
    force: bool,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    if !options.force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt("Are you sure you want to delete your account?")
            .default(false)
            .interact()?;

        ensure!(confirm, "Aborted account deletion");
    }

    users::delete(&state.http).await?.ensure_success()?;

    state.ctx = Context {
        override_api_url: state.ctx.override_api_url.clone(),
        ..Context::default()
    };
    state.ctx.save().await?;

    log::info!("Your account has been deleted");

    Ok(())
}
