pub mod auth;
pub mod completions;
pub mod deployments;
pub mod projects;
pub mod user;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;
use crate::store::Store;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Auth(auth::Options),
    User(user::Options),
    #[clap(name = "projects", alias = "project")]
    Projects(projects::Options),
    #[clap(name = "deployments", alias = "deployment", alias = "deploys")]
    Deployments(deployments::Options),
    Completions(completions::Options),
}

impl Commands {
    /// Commands that end the server-side session when they succeed.
    fn ends_session(&self) -> bool {
        matches!(
            self,
            Self::Auth(auth::Options {
                commands: auth::Commands::Logout(_),
            }) | Self::User(user::Options {
                commands: user::Commands::Delete(_),
            })
        )
    }
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    let ends_session = command.ends_session();

    // the jar is shared, cookies set during the command are visible here
    let http = state.http.clone();
    let mut session = state.session.clone();

    let result = match command {
        Commands::Completions(options) => {
            completions::handle(options, state);
            return Ok(());
        }

        Commands::Auth(options) => auth::handle(options, state).await,
        Commands::User(options) => user::handle(options, state).await,
        Commands::Projects(options) => projects::handle(options, state).await,
        Commands::Deployments(options) => deployments::handle(options, state).await,
    };

    let cookies = if ends_session && result.is_ok() {
        None
    } else {
        http.cookies()
    };

    session.set_cookies(&http.base_url, cookies);
    session.save().await?;

    result
}
