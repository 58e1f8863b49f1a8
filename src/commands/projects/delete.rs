use anyhow::{ensure, Result};
use clap::Parser;

use super::util::get_project;
use crate::bindings::projects;
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Delete a project")]
pub struct Options {
    #[clap(help = "ID of the project")]
    pub project: String,
    #[clap(long = "no-confirm", help = "Skip confirmation")]
    force: bool,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    if !options.force {
        let project = get_project(&state.http, &options.project).await?;

        let confirm = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete project `{}` ({})?",
                project.name, project.id
            ))
            .default(false)
            .interact()?;

        ensure!(confirm, "Aborted deletion of `{}`", project.name);
    }

    projects::delete(&state.http, &options.project)
        .await?
        .ensure_success()?;

    if state.ctx.default_project.as_deref() == Some(options.project.as_str()) {
        state.ctx.default_project = None;
        state.ctx.save().await?;
    }

    log::info!("Project {} deleted", options.project);

    Ok(())
}
