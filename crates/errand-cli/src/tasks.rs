//! Task file loading.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use errand_core::models::Task;
use serde::Deserialize;

/// Either a bare list of tasks or an object wrapping one.
#[derive(Deserialize)]
#[serde(untagged)]
enum TaskFile {
    List(Vec<Task>),
    Wrapped { tasks: Vec<Task> },
}

impl From<TaskFile> for Vec<Task> {
    fn from(file: TaskFile) -> Self {
        match file {
            TaskFile::List(tasks) | TaskFile::Wrapped { tasks } => tasks,
        }
    }
}

/// Reads tasks from a JSON or YAML file, chosen by extension.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read task file {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "yml" | "yaml"));

    let file: TaskFile = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML task file {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON task file {}", path.display()))?
    };

    Ok(file.into())
}
