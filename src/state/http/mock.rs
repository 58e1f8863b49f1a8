//! In-process API server for tests: records every request it receives and
//! answers each one with the same canned reply.

use std::convert::Infallible;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};

use hyper::header::HeaderName;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use tokio::task::JoinHandle;

use super::HttpClient;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub cookie: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Debug, Clone)]
struct Reply {
    status: u16,
    body: String,
    set_cookie: Option<String>,
}

type Requests = Arc<Mutex<Vec<RecordedRequest>>>;

pub struct MockServer {
    pub address: SocketAddr,
    requests: Requests,
    runtime: JoinHandle<()>,
}

impl MockServer {
    pub fn start(status: u16, body: &str) -> Self {
        Self::start_with_cookie(status, body, None)
    }

    pub fn start_with_cookie(status: u16, body: &str, set_cookie: Option<&str>) -> Self {
        let requests = Requests::default();

        let reply = Reply {
            status,
            body: body.to_string(),
            set_cookie: set_cookie.map(str::to_string),
        };

        let recorder = requests.clone();

        let service = make_service_fn(move |_| {
            let recorder = recorder.clone();
            let reply = reply.clone();

            async move {
                Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                    request_handler(req, recorder.clone(), reply.clone())
                }))
            }
        });

        let server = Server::bind(&([127, 0, 0, 1], 0).into()).serve(service);

        let address = server.local_addr();

        let runtime = tokio::spawn(async move {
            if let Err(error) = server.await {
                log::error!("Server error: {error}");
            }
        });

        Self {
            address,
            requests,
            runtime,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.address)
    }

    pub fn client(&self) -> HttpClient {
        HttpClient::new(Some(self.url()), None).expect("Failed to build client")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("poisoned").clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("No request was received")
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.runtime.abort();
    }
}

/// A client pointed at a port nothing listens on.
pub fn unreachable_client() -> HttpClient {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("Failed to reserve a port")
        .port();

    HttpClient::new(Some(format!("http://127.0.0.1:{port}")), None)
        .expect("Failed to build client")
}

async fn request_handler(
    req: Request<Body>,
    recorder: Requests,
    reply: Reply,
) -> Result<Response<Body>, Infallible> {
    let (method, path, content_type, accept, cookie) = {
        let header = |name: HeaderName| {
            req.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        (
            req.method().to_string(),
            req.uri().path().to_string(),
            header(hyper::header::CONTENT_TYPE),
            header(hyper::header::ACCEPT),
            header(hyper::header::COOKIE),
        )
    };

    let body = hyper::body::to_bytes(req.into_body())
        .await
        .map(|bytes| bytes.to_vec())
        .unwrap_or_default();

    recorder.lock().expect("poisoned").push(RecordedRequest {
        method,
        path,
        content_type,
        accept,
        cookie,
        body,
    });

    let mut response = Response::builder()
        .status(reply.status)
        .header("content-type", "application/json");

    if let Some(set_cookie) = reply.set_cookie {
        response = response.header("set-cookie", set_cookie);
    }

    Ok(response
        .body(Body::from(reply.body))
        .expect("Failed to build reply"))
}
