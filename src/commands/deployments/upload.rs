use anyhow::Result;
use clap::Parser;

use crate::bindings::deployments;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Upload the static files of a deployment")]
pub struct Options {
    #[clap(help = "ID of the deployment")]
    pub deployment: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project_id = state.ctx.current_project_error()?;

    deployments::add_static(&state.http, &options.deployment, &project_id)
        .await?
        .ensure_success()?;

    log::info!("Uploaded static files of {}", options.deployment);

    Ok(())
}
