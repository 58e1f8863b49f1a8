use anyhow::Result;

use super::types::Credentials;
use super::{json_body, Envelope, HttpClient};

pub async fn read(http: &HttpClient) -> Result<Envelope> {
    http.request("GET", "/user", None).await
}

pub async fn update(http: &HttpClient, email: &str, password: &str) -> Result<Envelope> {
    http.request("PUT", "/user", json_body(&Credentials { email, password })?).await
}

pub async fn delete(http: &HttpClient) -> Result<Envelope> {
    http.request("DELETE", "/user", None).await
}
