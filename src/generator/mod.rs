pub mod shards;
pub mod writer;

use crate::error::{Result, SearchError};
use crate::index::{normalize_all, SearchIndex};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShardRejection {
    pub file: PathBuf,
    pub position: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateUrl {
    pub url: String,
    pub kept: PathBuf,
    pub dropped: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub index: SearchIndex,
    pub files: usize,
    pub rejected: Vec<ShardRejection>,
    pub duplicates: Vec<DuplicateUrl>,
}

impl BuildOutput {
    pub fn has_warnings(&self) -> bool {
        !self.rejected.is_empty() || !self.duplicates.is_empty()
    }
}

/// Merges every `*.json` shard under `dir` into one index. Shards are read
/// in path order and the first record seen for a URL wins. `output` is the
/// index file being written; a previous build at that path is never read
/// back as a shard.
pub fn build_index(dir: &Path, output: Option<&Path>) -> Result<BuildOutput> {
    if !dir.is_dir() {
        return Err(SearchError::PathNotFound(dir.display().to_string()));
    }
    let skip = output.and_then(|path| path.canonicalize().ok());

    let mut output = BuildOutput::default();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for file in shards::list_shards(dir, skip.as_deref()) {
        let values = shards::read_shard(&file)?;
        output.files += 1;

        let (pages, rejected) = normalize_all(values);
        output
            .rejected
            .extend(rejected.into_iter().map(|rejection| ShardRejection {
                file: file.clone(),
                position: rejection.position,
                reason: rejection.reason,
            }));

        for page in pages {
            if let Some(kept) = seen.get(&page.url) {
                warn!(url = %page.url, kept = %kept.display(), dropped = %file.display(), "duplicate page url");
                output.duplicates.push(DuplicateUrl {
                    url: page.url.clone(),
                    kept: kept.clone(),
                    dropped: file.clone(),
                });
                continue;
            }
            seen.insert(page.url.clone(), file.clone());
            output.index.pages.push(page);
        }
    }

    info!(
        files = output.files,
        pages = output.index.len(),
        rejected = output.rejected.len(),
        duplicates = output.duplicates.len(),
        "search index built"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::page::Category;
    use std::fs;
    use tempfile::TempDir;

    fn record(title: &str, category: &str, url: &str) -> String {
        format!(
            r#"{{"title": "{title}", "description": "", "content": "", "keywords": [], "category": "{category}", "url": "{url}"}}"#
        )
    }

    #[test]
    fn build_merges_documents_and_single_records_in_path_order() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("platforms")).expect("shard dir should create");
        fs::write(
            dir.path().join("a-guides.json"),
            format!(
                r#"{{"pages": [{}, {}]}}"#,
                record("Intro", "guide", "/guides/intro"),
                record("Schema", "glossary", "/glossary/schema")
            ),
        )
        .expect("guide shard should write");
        fs::write(
            dir.path().join("platforms/claude.json"),
            record("Claude", "platform", "/platforms/claude"),
        )
        .expect("platform shard should write");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("note should write");

        let output = build_index(dir.path(), None).expect("build should succeed");
        assert_eq!(output.files, 2);
        assert!(!output.has_warnings());
        let urls = output
            .index
            .pages
            .iter()
            .map(|page| page.url.as_str())
            .collect::<Vec<_>>();
        assert_eq!(urls, vec!["/guides/intro", "/glossary/schema", "/platforms/claude"]);
        assert_eq!(output.index.count_by_category()[&Category::Platform], 1);
    }

    #[test]
    fn build_keeps_first_duplicate_url_and_reports_rejects() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("1.json"),
            record("First", "guide", "/same"),
        )
        .expect("first shard should write");
        fs::write(
            dir.path().join("2.json"),
            format!(
                r#"{{"pages": [{}, {}]}}"#,
                record("Second", "guide", "/same"),
                record("Bad", "blog", "/bad")
            ),
        )
        .expect("second shard should write");

        let output = build_index(dir.path(), None).expect("build should succeed");
        assert_eq!(output.index.len(), 1);
        assert_eq!(output.index.pages[0].title, "First");
        assert_eq!(output.duplicates.len(), 1);
        assert_eq!(output.duplicates[0].url, "/same");
        assert_eq!(output.rejected.len(), 1);
        assert_eq!(output.rejected[0].position, 1);
        assert!(output.has_warnings());
    }

    #[test]
    fn rebuild_ignores_previous_output_under_dir() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("data")).expect("data dir should create");
        fs::create_dir_all(dir.path().join("guides")).expect("guide dir should create");
        let out = dir.path().join("data/search-index.json");
        fs::write(
            dir.path().join("guides/g.json"),
            record("Old", "guide", "/guides/g"),
        )
        .expect("shard should write");

        let first = build_index(dir.path(), Some(&out)).expect("first build should succeed");
        writer::write_index(&out, &first.index).expect("index should write");

        fs::write(
            dir.path().join("guides/g.json"),
            record("New", "guide", "/guides/g"),
        )
        .expect("shard should rewrite");
        let second = build_index(dir.path(), Some(&out)).expect("rebuild should succeed");

        assert_eq!(second.files, 1);
        assert!(second.duplicates.is_empty());
        assert_eq!(second.index.pages[0].title, "New");
    }

    #[test]
    fn build_fails_on_unparseable_shard() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("broken.json"), "{").expect("broken shard should write");
        let err = build_index(dir.path(), None).expect_err("build should fail");
        assert!(matches!(err, SearchError::IndexParse(_)));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn build_requires_directory() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = build_index(&dir.path().join("missing"), None).expect_err("build should fail");
        assert!(matches!(err, SearchError::PathNotFound(_)));
    }
}
