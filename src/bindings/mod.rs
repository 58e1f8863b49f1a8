//! Typed operations over the Backendless API.
//!
//! Every operation is a free function taking the shared [`HttpClient`] and
//! sends exactly one request (except [`deployments::add_static`], which
//! sends none). Whatever status the server answers with is returned as an
//! [`Envelope`]; callers decide what counts as a failure.

pub mod authentication;
pub mod deployments;
pub mod projects;
pub mod types;
pub mod users;

use anyhow::{Context, Result};
use serde::Serialize;

pub use crate::state::http::{Envelope, HttpClient};

fn json_body<T>(body: &T) -> Result<Option<Vec<u8>>>
where
    T: Serialize,
{
    serde_json::to_vec(body)
        .map(Some)
        .context("Failed to serialize request body")
}
