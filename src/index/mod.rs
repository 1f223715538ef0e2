pub mod normalize;

use crate::error::{Result, SearchError};
use crate::types::page::{Category, PageRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Top-level shape of a search index file.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    pages: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct IndexDocument<'a> {
    pub pages: &'a [PageRecord],
}

/// A record that was dropped while loading, with its zero-based position in
/// the source `pages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejected {
    pub position: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    pub pages: Vec<PageRecord>,
    pub rejected: Vec<Rejected>,
    pub fingerprint: Option<String>,
}

impl SearchIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_pages(pages: Vec<PageRecord>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let document: RawDocument = serde_json::from_str(source)
            .map_err(|e| SearchError::IndexParse(e.to_string()))?;

        let (pages, rejected) = normalize_all(document.pages);
        debug!(
            pages = pages.len(),
            rejected = rejected.len(),
            "search index parsed"
        );

        Ok(Self {
            pages,
            rejected,
            fingerprint: Some(sha256_hex(source.as_bytes())),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SearchError::PathNotFound(path.display().to_string()));
        }
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    /// Loads the index, treating an unreadable or unparseable file as an
    /// empty index so that every query simply finds nothing.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(index) => index,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "search index unavailable, using empty index");
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn count_by_category(&self) -> BTreeMap<Category, usize> {
        let mut counts = Category::ALL
            .into_iter()
            .map(|category| (category, 0))
            .collect::<BTreeMap<_, _>>();
        for page in &self.pages {
            *counts.entry(page.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&IndexDocument { pages: &self.pages })
    }
}

pub(crate) fn normalize_all(values: Vec<Value>) -> (Vec<PageRecord>, Vec<Rejected>) {
    let mut pages = Vec::with_capacity(values.len());
    let mut rejected = Vec::new();
    for (position, value) in values.into_iter().enumerate() {
        match normalize::normalize_record(value) {
            Ok(page) => pages.push(page),
            Err(reason) => {
                warn!(position, reason = %reason, "rejecting search index record");
                rejected.push(Rejected { position, reason });
            }
        }
    }
    (pages, rejected)
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
