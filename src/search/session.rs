use crate::index::SearchIndex;
use crate::types::page::{CategoryFilter, ScoredResult};

/// What a single search action produced. "Nothing typed yet" and "nothing
/// found" are kept apart so a renderer can show them differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    NotSearched {
        filter: CategoryFilter,
    },
    NoMatches {
        query: String,
        filter: CategoryFilter,
    },
    Matches {
        query: String,
        filter: CategoryFilter,
        results: Vec<ScoredResult>,
    },
}

impl SearchOutcome {
    pub fn results(&self) -> &[ScoredResult] {
        match self {
            Self::Matches { results, .. } => results.as_slice(),
            _ => &[],
        }
    }

    pub fn has_matches(&self) -> bool {
        matches!(self, Self::Matches { .. })
    }
}

/// The loaded index together with the user's current category selection.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    index: SearchIndex,
    filter: CategoryFilter,
    last_query: Option<String>,
}

impl SearchSession {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Switches the category filter. If a non-blank query has already been
    /// searched, it is searched again under the new filter.
    pub fn select_category(&mut self, filter: CategoryFilter) -> Option<SearchOutcome> {
        self.filter = filter;
        let query = self.last_query.clone()?;
        Some(self.search(&query))
    }

    pub fn search(&mut self, query: &str) -> SearchOutcome {
        if query.trim().is_empty() {
            self.last_query = None;
            return SearchOutcome::NotSearched {
                filter: self.filter,
            };
        }
        self.last_query = Some(query.to_string());

        let results = super::score(query, &self.index.pages, self.filter);
        let query = query.trim().to_string();
        if results.is_empty() {
            SearchOutcome::NoMatches {
                query,
                filter: self.filter,
            }
        } else {
            SearchOutcome::Matches {
                query,
                filter: self.filter,
                results,
            }
        }
    }
}
