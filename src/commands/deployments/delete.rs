use anyhow::{ensure, Result};
use clap::Parser;

use crate::bindings::deployments;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Delete a deployment")]
pub struct Options {
    #[clap(help = "ID of the deployment")]
    pub deployment: String,
    #[clap(long = "no-confirm", help = "Skip confirmation")]
    force: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project_id = state.ctx.current_project_error()?;

    if !options.force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete deployment {}?",
                options.deployment
            ))
            .default(false)
            .interact()?;

        ensure!(confirm, "Aborted deletion of {}", options.deployment);
    }

    deployments::delete(&state.http, &options.deployment, &project_id)
        .await?
        .ensure_success()?;

    log::info!("Deployment {} deleted", options.deployment);

    Ok(())
}
