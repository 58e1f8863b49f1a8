use anyhow::Result;

use super::types::{Credentials, RegisterParams};
use super::{json_body, Envelope, HttpClient};

pub async fn register(
    http: &HttpClient,
    email: &str,
    username: &str,
    password: &str,
) -> Result<Envelope> {
    http.request(
        "POST",
        "/authentication/register",
        json_body(&RegisterParams {
            email,
            username,
            password,
        })?,
    )
    .await
}

/// On success the server sets the session cookie, which the client keeps
/// for every later request.
pub async fn login(http: &HttpClient, email: &str, password: &str) -> Result<Envelope> {
    http.request(
        "POST",
        "/authentication/login",
        json_body(&Credentials { email, password })?,
    )
    .await
}

pub async fn logout(http: &HttpClient) -> Result<Envelope> {
    http.request("GET", "/authentication/logout", None).await
}
