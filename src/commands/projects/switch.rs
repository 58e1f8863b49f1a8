use anyhow::Result;
use clap::Parser;

use super::util::{format_projects, get_all_projects, get_project};
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Switch to a different project")]
pub struct Options {
    #[clap(help = "ID of the project to use")]
    pub project: Option<String>,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let project = match options.project {
        Some(id) => get_project(&state.http, &id).await?,

        None => {
            let projects = get_all_projects(&state.http).await?;

            anyhow::ensure!(!projects.is_empty(), "No projects found");

            let projects_fmt =
                format_projects(&projects, state.ctx.default_project.as_deref(), false)?;

            let idx = dialoguer::Select::new()
                .with_prompt("Select a project to set as default")
                .items(&projects_fmt)
                .default(
                    state
                        .ctx
                        .default_project
                        .as_ref()
                        .and_then(|id| projects.iter().position(|p| &p.id == id))
                        .unwrap_or(0),
                )
                .interact()?;

            projects[idx].clone()
        }
    };

    state.ctx.default_project = Some(project.id.clone());
    state.ctx.save().await?;

    log::info!("Switched to project `{}` ({})", project.name, project.id);

    Ok(())
}
