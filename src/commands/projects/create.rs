use anyhow::Result;
use clap::Parser;

use crate::bindings::projects;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Create a new project")]
pub struct Options {
    #[clap(help = "Name of the project")]
    pub name: Option<String>,
    #[clap(short, long, help = "Description of the project")]
    pub description: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let name = if let Some(name) = options.name {
        name
    } else {
        dialoguer::Input::<String>::new()
            .with_prompt("Name of the project")
            .interact_text()?
    };

    let description = if let Some(description) = options.description {
        description
    } else {
        dialoguer::Input::<String>::new()
            .with_prompt("Description of the project")
            .allow_empty(true)
            .interact_text()?
    };

    projects::create(&state.http, &name, &description)
        .await?
        .ensure_success()?;

    log::info!("Created project `{name}`");

    Ok(())
}
