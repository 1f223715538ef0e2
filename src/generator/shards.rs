use crate::error::{Result, SearchError};
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists `*.json` files under `root` in path order. `skip` must already be
/// canonical; a file resolving to it is left out.
pub fn list_shards(root: &Path, skip: Option<&Path>) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter(|path| skip.is_none() || path.canonicalize().ok().as_deref() != skip)
        .collect()
}

/// A shard is either a whole index document (`{"pages": [...]}`) or a single
/// page record.
pub fn read_shard(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path).map_err(|source| SearchError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| SearchError::IndexParse(format!("{}: {}", path.display(), e)))?;

    match value {
        Value::Object(mut object) => match object.remove("pages") {
            Some(Value::Array(pages)) => Ok(pages),
            Some(_) => Err(SearchError::IndexParse(format!(
                "{}: `pages` must be an array",
                path.display()
            ))),
            None => Ok(vec![Value::Object(object)]),
        },
        _ => Err(SearchError::IndexParse(format!(
            "{}: expected an object",
            path.display()
        ))),
    }
}
