use crate::error::{Result, SearchError};
use crate::index::SearchIndex;
use std::fs;
use std::path::Path;

/// Writes `index` as a pretty-printed `{"pages": [...]}` document, creating
/// parent directories as needed.
pub fn write_index(path: &Path, index: &SearchIndex) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(SearchError::Io)?;
    }
    let json = index.to_json()?;
    fs::write(path, json).map_err(SearchError::Io)?;
    Ok(())
}
