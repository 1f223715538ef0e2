use super::{previews, RenderOptions};
use crate::search::session::SearchOutcome;
use crate::types::page::ScoredResult;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum OutcomeState {
    NotSearched,
    NoMatches,
    Matches,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    state: OutcomeState,
    query: Option<&'a str>,
    filter: String,
    count: usize,
    results: Vec<JsonResult<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonResult<'a> {
    #[serde(flatten)]
    result: &'a ScoredResult,
    snippet: String,
    link: String,
}

pub fn to_json(outcome: &SearchOutcome, options: &RenderOptions) -> Result<String, serde_json::Error> {
    let report = match outcome {
        SearchOutcome::NotSearched { filter } => JsonReport {
            generated_at: Utc::now().to_rfc3339(),
            state: OutcomeState::NotSearched,
            query: None,
            filter: filter.to_string(),
            count: 0,
            results: Vec::new(),
        },
        SearchOutcome::NoMatches { query, filter } => JsonReport {
            generated_at: Utc::now().to_rfc3339(),
            state: OutcomeState::NoMatches,
            query: Some(query.as_str()),
            filter: filter.to_string(),
            count: 0,
            results: Vec::new(),
        },
        SearchOutcome::Matches {
            query,
            filter,
            results,
        } => JsonReport {
            generated_at: Utc::now().to_rfc3339(),
            state: OutcomeState::Matches,
            query: Some(query.as_str()),
            filter: filter.to_string(),
            count: results.len(),
            results: previews(results, query, options)
                .into_iter()
                .map(|preview| JsonResult {
                    result: preview.result,
                    snippet: preview.snippet,
                    link: preview.link,
                })
                .collect(),
        },
    };

    serde_json::to_string_pretty(&report)
}
