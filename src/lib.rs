pub mod bindings;
pub mod commands;
pub mod config;
pub mod state;
pub mod store;
pub mod utils;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "backendless",
    about = "Interact with Backendless via command line",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        short = 'p',
        long = "project",
        help = "ID of the project to use",
        global = true
    )]
    pub project: Option<String>,

    #[clap(
        long = "server",
        help = "The API server to connect to",
        global = true
    )]
    pub server: Option<String>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        CLI::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let cli = CLI::try_parse_from([
            "backendless",
            "deployments",
            "ls",
            "--project",
            "p1",
            "--server",
            "http://localhost:8080",
        ])
        .unwrap();

        assert_eq!(cli.project.as_deref(), Some("p1"));
        assert_eq!(cli.server.as_deref(), Some("http://localhost:8080"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_validate_takes_an_optional_file() {
        use crate::commands::{deployments, Commands};

        for args in [
            &["backendless", "deployments", "validate"][..],
            &["backendless", "deployments", "validate", "site/backendless.yml"][..],
        ] {
            let cli = CLI::try_parse_from(args).unwrap();

            assert!(matches!(
                cli.commands,
                Commands::Deployments(deployments::Options {
                    commands: deployments::Commands::Validate(_),
                })
            ));
        }
    }
}
