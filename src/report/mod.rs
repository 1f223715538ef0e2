pub mod json;
pub mod md;
pub mod text;

use crate::error::SearchError;
use crate::search::highlight::highlight_with;
use crate::search::session::SearchOutcome;
use crate::search::snippet::{snippet, DEFAULT_MAX_LENGTH};
use crate::types::config::HighlightConfig;
use crate::types::page::{CategoryFilter, ScoredResult};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// `None` disables highlighting.
    pub highlight: Option<HighlightConfig>,
    pub snippet_length: usize,
    /// 0 renders every result.
    pub limit: usize,
    pub site_origin: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            highlight: Some(HighlightConfig::default()),
            snippet_length: DEFAULT_MAX_LENGTH,
            limit: 0,
            site_origin: String::new(),
        }
    }
}

/// A result prepared for display: highlighted title and snippet plus the
/// absolute link.
#[derive(Debug, Clone)]
pub struct Preview<'a> {
    pub result: &'a ScoredResult,
    pub title: String,
    pub snippet: String,
    pub link: String,
}

pub fn render(
    outcome: &SearchOutcome,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, SearchError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(outcome, options)),
        OutputFormat::Md => Ok(md::to_markdown(outcome, options)),
        OutputFormat::Json => json::to_json(outcome, options).map_err(SearchError::Json),
    }
}

/// `Found 3 results for "geo" in guide`
pub fn stats_label(count: usize, query: &str, filter: CategoryFilter) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Found {count} result{plural} for \"{query}\"{}", filter_suffix(filter))
}

pub fn no_results_label(query: &str, filter: CategoryFilter) -> String {
    format!("No results found for \"{query}\"{}", filter_suffix(filter))
}

pub const NOT_SEARCHED_LABEL: &str = "Enter a search term to find pages.";

fn filter_suffix(filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => String::new(),
        CategoryFilter::Only(category) => format!(" in {category}"),
    }
}

pub fn previews<'a>(
    results: &'a [ScoredResult],
    query: &str,
    options: &RenderOptions,
) -> Vec<Preview<'a>> {
    let shown = if options.limit == 0 {
        results.len()
    } else {
        options.limit.min(results.len())
    };

    results[..shown]
        .iter()
        .map(|result| {
            let excerpt = snippet(&result.matched_text, query, options.snippet_length);
            let (title, snippet) = match &options.highlight {
                Some(marker) => (
                    highlight_with(&result.page.title, query, marker),
                    highlight_with(&excerpt, query, marker),
                ),
                None => (result.page.title.clone(), excerpt),
            };
            Preview {
                result,
                title,
                snippet,
                link: format!("{}{}", options.site_origin.trim_end_matches('/'), result.page.url),
            }
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::page::Category;

    #[test]
    fn stats_label_pluralizes_and_names_filter() {
        assert_eq!(
            stats_label(1, "geo", CategoryFilter::All),
            "Found 1 result for \"geo\""
        );
        assert_eq!(
            stats_label(3, "geo", CategoryFilter::Only(Category::Guide)),
            "Found 3 results for \"geo\" in guide"
        );
    }

    #[test]
    fn previews_respect_limit_and_origin() {
        let outcome = fixtures::chatgpt_outcome();
        let options = RenderOptions {
            limit: 1,
            site_origin: "https://example.com/".to_string(),
            ..RenderOptions::default()
        };
        let previews = previews(outcome.results(), "chatgpt", &options);
        assert_eq!(previews.len(), 1);
        assert_eq!(previews[0].link, "https://example.com/a");
        assert_eq!(
            previews[0].title,
            "<span class=\"highlight\">ChatGPT</span> Guide"
        );
    }

    #[test]
    fn previews_without_highlight_keep_plain_text() {
        let outcome = fixtures::chatgpt_outcome();
        let options = RenderOptions {
            highlight: None,
            ..RenderOptions::default()
        };
        let previews = previews(outcome.results(), "chatgpt", &options);
        assert_eq!(previews.len(), 2);
        assert_eq!(previews[1].title, "Other");
        assert_eq!(previews[1].snippet, "ChatGPT mentioned here");
    }
}
