use anyhow::Result;
use clap::Parser;

use super::util::{format_projects, get_all_projects};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List all projects")]
pub struct Options {
    #[clap(short = 'q', long = "quiet", help = "Only print the IDs of the projects")]
    pub quiet: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let projects = get_all_projects(&state.http).await?;

    if options.quiet {
        let ids = projects
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");
    } else if projects.is_empty() {
        log::info!("No projects found");
    } else {
        let projects_fmt = format_projects(&projects, state.ctx.default_project.as_deref(), true)?;

        println!("{}", projects_fmt.join("\n"));
    }

    Ok(())
}
