use std::io::Write;

use anyhow::{anyhow, Result};
use tabwriter::TabWriter;

use crate::bindings::projects;
use crate::bindings::types::Project;
use crate::state::http::HttpClient;
use crate::utils::relative_time;

pub async fn get_all_projects(http: &HttpClient) -> Result<Vec<Project>> {
    projects::list(http).await?.ensure_success()?.data_as()
}

pub async fn get_project(http: &HttpClient, id: &str) -> Result<Project> {
    projects::read(http, id).await?.ensure_success()?.data_as()
}

pub fn format_projects(
    projects: &[Project],
    default: Option<&str>,
    title: bool,
) -> Result<Vec<String>> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(tw, "NAME\tID\tDESCRIPTION\tCREATED")?;
    }

    for project in projects {
        let marker = if Some(project.id.as_str()) == default {
            "*"
        } else {
            ""
        };

        writeln!(
            tw,
            "{}{}\t{}\t{}\t{} ago",
            project.name,
            marker,
            project.id,
            project.description,
            relative_time(project.created_at),
        )?;
    }

    let table = tw
        .into_inner()
        .map_err(|_| anyhow!("Failed to format projects"))?;

    Ok(String::from_utf8(table)?
        .lines()
        .map(std::string::ToString::to_string)
        .collect())
}

#[cfg(test)]
mod test {
    use chrono::Utc;

    use super::*;

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            user_id: "u1".to_string(),
            name: name.to_string(),
            description: "a test project".to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn test_format_projects() {
        let projects = vec![project("p1", "demo"), project("p2", "other")];

        let lines = format_projects(&projects, Some("p2"), true).unwrap();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].starts_with("demo "));
        assert!(lines[2].starts_with("other*"));
        assert!(lines[1].contains("a test project"));
    }
}
