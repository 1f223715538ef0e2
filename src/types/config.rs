use crate::error::SearchError;
use crate::report::OutputFormat;
use crate::types::page::CategoryFilter;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_INDEX_PATH: &str = "assets/data/search-index.json";
pub const DEFAULT_SNIPPET_LENGTH: usize = 200;
pub const DEFAULT_HIGHLIGHT_OPEN: &str = "<span class=\"highlight\">";
pub const DEFAULT_HIGHLIGHT_CLOSE: &str = "</span>";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub index: IndexConfig,
    pub search: QueryConfig,
    pub highlight: HighlightConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub path: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INDEX_PATH),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub default_category: String,
    pub snippet_length: usize,
    /// Maximum number of rendered results; 0 renders all of them.
    pub limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_category: "all".to_string(),
            snippet_length: DEFAULT_SNIPPET_LENGTH,
            limit: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub open: String,
    pub close: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            open: DEFAULT_HIGHLIGHT_OPEN.to_string(),
            close: DEFAULT_HIGHLIGHT_CLOSE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub site_origin: String,
}

impl SearchConfig {
    pub fn category_filter(&self) -> Result<CategoryFilter, SearchError> {
        self.search.default_category.parse().map_err(|_| {
            SearchError::ConfigParse(format!(
                "unsupported search.default_category: {}",
                self.search.default_category
            ))
        })
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        self.category_filter()?;

        if self.search.snippet_length == 0 {
            return Err(SearchError::ConfigParse(
                "search.snippet_length must be greater than 0".to_string(),
            ));
        }

        if self.highlight.open.is_empty() != self.highlight.close.is_empty() {
            return Err(SearchError::ConfigParse(
                "highlight.open and highlight.close must both be set or both be empty"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
