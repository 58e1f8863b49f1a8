use anyhow::Result;
use clap::Parser;

use super::util::format_deployments;
use crate::bindings::deployments;
use crate::bindings::types::Deployment;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List all deployments of the project")]
pub struct Options {
    #[clap(short = 'q', long = "quiet", help = "Only print the IDs of the deployments")]
    pub quiet: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project_id = state.ctx.current_project_error()?;

    let deployments = deployments::list(&state.http, &project_id)
        .await?
        .ensure_success()?
        .data_as::<Vec<Deployment>>()?;

    if options.quiet {
        let ids = deployments
            .iter()
            .map(|d| d.id.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");
    } else if deployments.is_empty() {
        log::info!("No deployments found in project {project_id}");
    } else {
        println!("{}", format_deployments(&deployments, true)?.join("\n"));
    }

    Ok(())
}
