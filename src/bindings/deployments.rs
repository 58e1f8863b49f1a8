use anyhow::Result;
use thiserror::Error;

use super::types::{Handler, Route};
use super::{Envelope, HttpClient};

/// Returned by operations that exist in the API surface but have no client
/// implementation yet. No request is sent.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0} is not implemented yet")]
pub struct NotImplemented(pub &'static str);

pub async fn list(http: &HttpClient, project_id: &str) -> Result<Envelope> {
    http.request("GET", &format!("/projects/{project_id}/deployments"), None).await
}

/// Registers a new deployment for the project.
///
/// The deployment configuration is accepted but not transmitted: the
/// request goes out without a body.
pub async fn create(
    http: &HttpClient,
    project_id: &str,
    handlers: &[Handler],
    name: &str,
    routes: &[Route],
    static_directory: &str,
    version: &str,
) -> Result<Envelope> {
    log::debug!(
        "Deployment `{name}` ({version}): {} handlers, {} routes, static files from `{static_directory}` are not sent",
        handlers.len(),
        routes.len(),
    );

    http.request("POST", &format!("/projects/{project_id}/deployments"), None)
        .await
}

pub async fn read(http: &HttpClient, id: &str, project_id: &str) -> Result<Envelope> {
    http.request(
        "GET",
        &format!("/projects/{project_id}/deployments/{id}"),
        None,
    )
    .await
}

pub async fn delete(http: &HttpClient, id: &str, project_id: &str) -> Result<Envelope> {
    http.request(
        "DELETE",
        &format!("/projects/{project_id}/deployments/{id}"),
        None,
    )
    .await
}

/// Uploading a deployment's static files. Always fails with
/// [`NotImplemented`].
pub async fn add_static(_http: &HttpClient, id: &str, project_id: &str) -> Result<Envelope> {
    log::debug!("Static upload requested for deployment {id} of project {project_id}");

    Err(NotImplemented("Uploading static files").into())
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::bindings::types::{CreatedDeployment, DeploymentDetails};
    use crate::state::http::mock::{unreachable_client, MockServer};

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start(200, r#"{"success":true,"data":[]}"#);

        let envelope = list(&server.client(), "p1").await.unwrap();

        assert_eq!(envelope.data(), Some(&json!([])));

        let request = server.last_request();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/projects/p1/deployments");
    }

    #[tokio::test]
    async fn test_create_sends_no_body() {
        let server = MockServer::start(200, r#"{"success":true,"data":{"id":"d1"}}"#);

        let handlers = vec![Handler {
            name: "hello".to_string(),
            logic: json!({ "return": "hello world" }),
            ..Handler::default()
        }];
        let routes = vec![Route {
            path: "/hello".to_string(),
            methods: vec!["GET".to_string()],
            handler: "hello".to_string(),
        }];

        let envelope = create(
            &server.client(),
            "p1",
            &handlers,
            "site",
            &routes,
            "./static",
            "1.0.0",
        )
        .await
        .unwrap();

        assert_eq!(
            envelope.data_as::<CreatedDeployment>().unwrap(),
            CreatedDeployment {
                id: "d1".to_string()
            }
        );

        let request = server.last_request();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/projects/p1/deployments");
        assert_eq!(request.content_type, None);
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn test_read() {
        let server = MockServer::start(
            200,
            r#"{"success":true,"data":{"id":"d1","project_id":"p1","version":"1","hash":"h","has_static":true,"published_at":"2020-08-01T12:30:00","routes":[],"handlers":[]}}"#,
        );

        let envelope = read(&server.client(), "d1", "p1").await.unwrap();

        assert_eq!(
            envelope.data_as::<DeploymentDetails>().unwrap().deployment.project_id,
            "p1"
        );

        let request = server.last_request();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/projects/p1/deployments/d1");
    }

    #[tokio::test]
    async fn test_read_incomplete_deployment() {
        let server = MockServer::start(
            406,
            r#"{"success":false,"reason":"deployment is not yet complete"}"#,
        );

        let envelope = read(&server.client(), "d1", "p1").await.unwrap();

        assert_eq!(envelope.status, 406);
        assert_eq!(envelope.reason(), Some("deployment is not yet complete"));
    }

    #[tokio::test]
    async fn test_delete() {
        let server = MockServer::start(200, r#"{"success":true}"#);

        delete(&server.client(), "d1", "p1").await.unwrap();

        let request = server.last_request();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/projects/p1/deployments/d1");
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn test_add_static_sends_nothing() {
        let server = MockServer::start(200, r#"{"success":true}"#);

        let error = add_static(&server.client(), "d1", "p1").await.unwrap_err();

        assert_eq!(
            error.downcast_ref::<NotImplemented>(),
            Some(&NotImplemented("Uploading static files"))
        );
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_transport_failure() {
        let result = create(&unreachable_client(), "p1", &[], "site", &[], "./static", "1").await;

        assert!(result.is_err());
    }
}
