use anyhow::Result;

use super::types::ProjectParams;
use super::{json_body, Envelope, HttpClient};

pub async fn list(http: &HttpClient) -> Result<Envelope> {
    http.request("GET", "/projects", None).await
}

pub async fn create(http: &HttpClient, name: &str, description: &str) -> Result<Envelope> {
    http.request(
        "POST",
        "/projects",
        json_body(&ProjectParams { name, description })?,
    )
    .await
}

pub async fn read(http: &HttpClient, id: &str) -> Result<Envelope> {
    http.request("GET", &format!("/projects/{id}"), None).await
}

pub async fn update(
    http: &HttpClient,
    id: &str,
    name: &str,
    description: &str,
) -> Result<Envelope> {
    http.request(
        "PUT",
        &format!("/projects/{id}"),
        json_body(&ProjectParams { name, description })?,
    )
    .await
}

pub async fn delete(http: &HttpClient, id: &str) -> Result<Envelope> {
    http.request("DELETE", &format!("/projects/{id}"), None).await
}
