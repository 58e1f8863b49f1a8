use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tabwriter::TabWriter;

use crate::bindings::types::{Deployment, StoredRoute};
use crate::store::project_file::{ProjectFile, VALID_PROJECT_FILENAMES};
use crate::utils::relative_time;

/// Loads `file`, or looks for a project file in the current directory.
pub async fn load_project_file(file: Option<PathBuf>) -> Result<ProjectFile> {
    match file {
        Some(path) => ProjectFile::load(path).await,

        None => ProjectFile::find(&std::env::current_dir()?)
            .await?
            .with_context(|| {
                format!(
                    "No project file found, expected one of: {}",
                    VALID_PROJECT_FILENAMES.join(", ")
                )
            }),
    }
}

pub fn format_deployments(deployments: &[Deployment], title: bool) -> Result<Vec<String>> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(tw, "ID\tVERSION\tSTATIC\tPUBLISHED")?;
    }

    for deployment in deployments {
        writeln!(
            tw,
            "{}\t{}\t{}\t{} ago",
            deployment.id,
            if deployment.version.is_empty() {
                "-"
            } else {
                deployment.version.as_str()
            },
            if deployment.has_static { "yes" } else { "no" },
            relative_time(deployment.published_at),
        )?;
    }

    into_lines(tw)
}

pub fn format_routes(routes: &[StoredRoute], title: bool) -> Result<Vec<String>> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(tw, "PATH\tMETHODS\tHANDLER")?;
    }

    for route in routes {
        writeln!(
            tw,
            "{}\t{}\t{}",
            route.path,
            route.methods.join(","),
            route.handler
        )?;
    }

    into_lines(tw)
}

fn into_lines(tw: TabWriter<Vec<u8>>) -> Result<Vec<String>> {
    let table = tw
        .into_inner()
        .map_err(|_| anyhow!("Failed to format table"))?;

    Ok(String::from_utf8(table)?
        .lines()
        .map(std::string::ToString::to_string)
        .collect())
}

#[cfg(test)]
mod test {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_format_deployments() {
        let deployments = vec![Deployment {
            id: "d1".to_string(),
            project_id: "p1".to_string(),
            version: String::new(),
            hash: "h".to_string(),
            has_static: false,
            published_at: Utc::now().naive_utc(),
        }];

        let lines = format_deployments(&deployments, true).unwrap();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("d1"));
        assert!(lines[1].contains(" - "));
        assert!(lines[1].contains(" no "));
    }

    #[test]
    fn test_format_routes() {
        let routes = vec![StoredRoute {
            id: "r1".to_string(),
            deployment_id: "d1".to_string(),
            path: "/hello".to_string(),
            methods: vec!["GET".to_string(), "POST".to_string()],
            handler: "hello".to_string(),
        }];

        let lines = format_routes(&routes, false).unwrap();

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("GET,POST"));
        assert!(lines[0].ends_with("hello"));
    }
}
