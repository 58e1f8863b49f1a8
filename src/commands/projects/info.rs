use anyhow::Result;
use clap::Parser;

use super::util::get_project;
use crate::state::State;
use crate::utils::relative_time;

#[derive(Debug, Parser)]
#[clap(about = "Get information about a project")]
pub struct Options {
    #[clap(help = "ID of the project, defaults to the current project")]
    pub project: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let id = match options.project {
        Some(id) => id,
        None => state.ctx.current_project_error()?,
    };

    let project = get_project(&state.http, &id).await?;

    println!("Project: `{}` ({})", project.name, project.id);

    if !project.description.is_empty() {
        println!("  {}", project.description);
    }

    println!("  Created {} ago", relative_time(project.created_at));

    if let Some(updated_at) = project.updated_at {
        println!("  Updated {} ago", relative_time(updated_at));
    }

    Ok(())
}
