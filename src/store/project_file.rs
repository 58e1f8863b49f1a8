use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};
use serde_json::Value;
use tokio::fs;

use crate::bindings::types::DeploymentFormat;

pub static VALID_PROJECT_FILENAMES: &[&str] =
    &["backendless.yml", "backendless.yaml", "backendless.json"];

/// A deployment configuration read from disk, with every `$ref` resolved.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    pub path: PathBuf,
    pub format: DeploymentFormat,
}

impl ProjectFile {
    pub async fn find(directory: &Path) -> Result<Option<Self>> {
        for filename in VALID_PROJECT_FILENAMES {
            let path = directory.join(filename);

            if fs::metadata(&path).await.is_ok() {
                return Self::load(path).await.map(Some);
            }
        }

        Ok(None)
    }

    pub async fn load(path: PathBuf) -> Result<Self> {
        let raw = read_document(&path).await?;

        let directory = path.parent().unwrap_or_else(|| Path::new("."));
        let resolved = follow_references(raw, directory).await?;

        let format = serde_json::from_value(resolved)
            .with_context(|| format!("Invalid project format in {}", path.display()))?;

        log::debug!("Loaded project file {}", path.display());

        Ok(Self { path, format })
    }

    /// The static directory, relative to the project file.
    pub fn static_directory(&self) -> PathBuf {
        self.path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&self.format.static_directory)
    }

    pub async fn ensure_static_directory(&self) -> Result<PathBuf> {
        let directory = self.static_directory();

        let exists = fs::metadata(&directory)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false);

        ensure!(
            exists,
            "Static directory {} does not exist",
            directory.display()
        );

        Ok(directory)
    }
}

async fn read_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read {}", path.display()))?;

    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(anyhow::Error::from),
        // yaml is a superset of json so this covers files without an extension
        _ => serde_yaml::from_str(&content).map_err(anyhow::Error::from),
    };

    parsed.with_context(|| format!("Could not parse {}", path.display()))
}

/// Replaces `{"$ref": "file"}` entries of `routes` and `handlers` with the
/// document they point to, relative to `directory`.
async fn follow_references(mut raw: Value, directory: &Path) -> Result<Value> {
    let Some(document) = raw.as_object_mut() else {
        bail!("Project file must be a mapping");
    };

    for key in ["routes", "handlers"] {
        let Some(items) = document.get_mut(key).and_then(Value::as_array_mut) else {
            bail!("`{key}` in project file must be a list");
        };

        for item in items.iter_mut() {
            if let Some(reference) = reference(item) {
                *item = read_document(&directory.join(reference)).await?;
            }
        }
    }

    Ok(raw)
}

fn reference(item: &Value) -> Option<String> {
    let object = item.as_object()?;

    if object.len() != 1 {
        return None;
    }

    object
        .get("$ref")?
        .as_str()
        .map(std::string::ToString::to_string)
}
