use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// request bodies

#[derive(Debug, Serialize)]
pub struct RegisterParams<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ProjectParams<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

// types for the API response

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Deployment {
    pub id: String,
    pub project_id: String,
    pub version: String,
    pub hash: String,
    pub has_static: bool,
    pub published_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StoredRoute {
    pub id: String,
    pub deployment_id: String,
    pub path: String,
    pub methods: Vec<String>,
    pub handler: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StoredHandler {
    pub id: String,
    pub deployment_id: String,
    pub name: String,
    pub query_parameters: Option<Vec<String>>,
    pub headers: Option<Vec<String>>,
    pub path_parameters: Option<Vec<String>>,
    pub body: Option<Value>,
    pub logic: Value,
}

/// A deployment together with the routes and handlers registered for it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DeploymentDetails {
    #[serde(flatten)]
    pub deployment: Deployment,
    pub routes: Vec<StoredRoute>,
    pub handlers: Vec<StoredHandler>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CreatedDeployment {
    pub id: String,
}

// deployment configuration, as written in a project file

fn default_static_directory() -> String {
    "./static".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DeploymentFormat {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default = "default_static_directory")]
    pub static_directory: String,
    pub routes: Vec<Route>,
    pub handlers: Vec<Handler>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Route {
    pub path: String,
    pub methods: Vec<String>,
    pub handler: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Handler {
    pub name: String,
    pub query_parameters: Option<Vec<String>>,
    pub headers: Option<Vec<String>>,
    pub path_parameters: Option<Vec<String>>,
    pub body: Option<Value>,
    pub logic: Value,
}
