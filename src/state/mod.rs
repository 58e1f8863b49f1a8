pub mod http;

use anyhow::{ensure, Result};

use self::http::HttpClient;
use crate::config::EXEC_NAME;
use crate::store::context::Context;
use crate::store::session::Session;
use crate::store::Store;

#[derive(Debug)]
pub struct State {
    pub ctx: Context,
    pub http: HttpClient,
    pub session: Session,
}

pub struct StateOptions {
    pub override_project: Option<String>,
    pub override_api_url: Option<String>,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let mut ctx = Context::new().await?;
        let session = Session::new().await?;

        ctx.project_override = options.override_project;

        // the flag wins over the env, the env over the saved context
        let api_url = options
            .override_api_url
            .or_else(|| std::env::var("API_URL").ok())
            .or_else(|| ctx.override_api_url.clone());

        let http = HttpClient::new(api_url, None)?;

        // only the cookies this origin handed out
        if let Some(cookies) = session.cookies_for(&http.base_url) {
            http.restore_cookies(cookies)?;
        }

        Ok(Self { ctx, http, session })
    }

    /// Fails early when this machine holds no session for the API.
    pub fn ensure_logged_in(&self) -> Result<()> {
        ensure!(
            self.http.cookies().is_some(),
            "You are not logged in. Please run `{} auth login` first.",
            EXEC_NAME
        );

        Ok(())
    }
}
