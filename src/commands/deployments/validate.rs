use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::util::load_project_file;

#[derive(Debug, Parser)]
#[clap(about = "Check a project file without deploying it")]
pub struct Options {
    #[clap(
        help = "Path to the project file",
        long_help = "Path to the project file, looks for backendless.{yml,yaml,json} in the current directory when omitted"
    )]
    pub file: Option<PathBuf>,
}

pub async fn handle(options: Options) -> Result<()> {
    let project_file = load_project_file(options.file).await?;
    let static_directory = project_file.ensure_static_directory().await?;

    let format = &project_file.format;

    log::info!(
        "`{}` is valid: {} routes, {} handlers, static files from {}",
        format.name,
        format.routes.len(),
        format.handlers.len(),
        static_directory.display()
    );

    Ok(())
}
