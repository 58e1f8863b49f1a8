use anyhow::Result;
use clap::Parser;

use super::util::get_project;
use crate::bindings::projects;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Rename a project or change its description")]
pub struct Options {
    #[clap(help = "ID of the project")]
    pub project: String,
    #[clap(short, long, help = "New name of the project")]
    pub name: Option<String>,
    #[clap(short, long, help = "New description of the project")]
    pub description: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    // the API replaces both fields, keep whatever was not given
    let (name, description) = match (options.name, options.description) {
        (Some(name), Some(description)) => (name, description),
        (name, description) => {
            let current = get_project(&state.http, &options.project).await?;

            (
                name.unwrap_or(current.name),
                description.unwrap_or(current.description),
            )
        }
    };

    projects::update(&state.http, &options.project, &name, &description)
        .await?
        .ensure_success()?;

    log::info!("Updated project `{name}` ({})", options.project);

    Ok(())
}
