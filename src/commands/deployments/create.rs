use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::util::load_project_file;
use crate::bindings::deployments;
use crate::bindings::types::CreatedDeployment;
use crate::config::EXEC_NAME;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Create a deployment from a project file")]
pub struct Options {
    #[clap(
        help = "Path to the project file",
        long_help = "Path to the project file, looks for backendless.{yml,yaml,json} in the current directory when omitted"
    )]
    pub file: Option<PathBuf>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project_id = state.ctx.current_project_error()?;

    let project_file = load_project_file(options.file).await?;
    project_file.ensure_static_directory().await?;

    let format = &project_file.format;

    let response = deployments::create(
        &state.http,
        &project_id,
        &format.handlers,
        &format.name,
        &format.routes,
        &format.static_directory,
        &format.version,
    )
    .await?
    .ensure_success()?;

    match response.data_as::<CreatedDeployment>() {
        Ok(CreatedDeployment { id }) => {
            log::info!("Created deployment {id} for `{}`", format.name);
            log::info!("Upload its static files with `{EXEC_NAME} deployments upload {id}`");
        }

        Err(_) => log::info!("Created deployment for `{}`", format.name),
    }

    Ok(())
}
