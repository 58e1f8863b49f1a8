use anyhow::Result;
use clap::Parser;

use super::util::format_routes;
use crate::bindings::deployments;
use crate::bindings::types::DeploymentDetails;
use crate::state::State;
use crate::utils::relative_time;

#[derive(Debug, Parser)]
#[clap(about = "Get information about a deployment")]
pub struct Options {
    #[clap(help = "ID of the deployment")]
    pub deployment: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project_id = state.ctx.current_project_error()?;

    let DeploymentDetails {
        deployment,
        routes,
        handlers,
    } = deployments::read(&state.http, &options.deployment, &project_id)
        .await?
        .ensure_success()?
        .data_as()?;

    println!("Deployment: {} ({})", deployment.id, deployment.hash);
    println!("  Version: {}", deployment.version);
    println!(
        "  Published {} ago",
        relative_time(deployment.published_at)
    );

    if !routes.is_empty() {
        println!("Routes:");
        println!("{}", format_routes(&routes, true)?.join("\n"));
    }

    if !handlers.is_empty() {
        println!("Handlers:");

        for handler in handlers {
            println!("  {} ({})", handler.name, handler.id);
        }
    }

    Ok(())
}
