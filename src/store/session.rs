use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::utils::store_path;
use super::Storable;
use crate::impl_store;

/// Cookies handed out by each API origin, in `Cookie` header form, carried
/// over between runs.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Session {
    #[serde(default)]
    pub origins: BTreeMap<String, String>,
}

impl Storable for Session {
    fn path() -> Result<PathBuf> {
        store_path("session.json")
    }
}

impl Session {
    /// Cookies saved for exactly this API origin.
    pub fn cookies_for(&self, base_url: &str) -> Option<&str> {
        self.origins
            .get(base_url.trim_end_matches('/'))
            .map(String::as_str)
    }

    pub fn set_cookies(&mut self, base_url: &str, cookies: Option<String>) {
        let origin = base_url.trim_end_matches('/').to_string();

        match cookies {
            Some(cookies) => {
                self.origins.insert(origin, cookies);
            }

            None => {
                self.origins.remove(&origin);
            }
        }
    }
}

impl_store!(Session);
