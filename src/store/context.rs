use std::path::PathBuf;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use super::utils::store_path;
use super::Storable;
use crate::bindings::types::User;
use crate::config::EXEC_NAME;
use crate::impl_store;

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Context {
    /// The account read back after the last successful login.
    pub user: Option<User>,
    pub default_project: Option<String>,
    pub override_api_url: Option<String>,

    // from the `--project` flag, never saved
    #[serde(skip)]
    pub project_override: Option<String>,
}

impl Storable for Context {
    fn path() -> Result<PathBuf> {
        store_path("context.json")
    }
}

impl Context {
    pub fn current_project(&self) -> Option<String> {
        self.project_override
            .clone()
            .or_else(|| self.default_project.clone())
    }

    pub fn current_project_error(&self) -> Result<String> {
        self.current_project().with_context(|| {
            format!(
                "No project selected. Run `{EXEC_NAME} projects switch` to select one or use `--project` to specify a project"
            )
        })
    }

    /// Mirrors an email change onto the cached user. Returns whether
    /// anything changed.
    pub fn update_user_email(&mut self, email: &str) -> bool {
        match self.user.as_mut() {
            Some(user) if user.email != email => {
                user.email = email.to_string();
                true
            }

            _ => false,
        }
    }
}

impl_store!(Context);
