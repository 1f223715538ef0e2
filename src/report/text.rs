use super::{no_results_label, previews, stats_label, RenderOptions, NOT_SEARCHED_LABEL};
use crate::search::session::SearchOutcome;

pub fn to_text(outcome: &SearchOutcome, options: &RenderOptions) -> String {
    let (query, filter, results) = match outcome {
        SearchOutcome::NotSearched { .. } => return NOT_SEARCHED_LABEL.to_string(),
        SearchOutcome::NoMatches { query, filter } => return no_results_label(query, *filter),
        SearchOutcome::Matches {
            query,
            filter,
            results,
        } => (query, *filter, results),
    };

    let mut output = stats_label(results.len(), query, filter);
    output.push('\n');
    for (position, preview) in previews(results, query, options).iter().enumerate() {
        output.push_str(&format!(
            "\n{}. [{}] {} (score {})\n   {}\n   {}\n",
            position + 1,
            preview.result.page.category.label(),
            preview.title,
            preview.result.score,
            preview.snippet,
            preview.link
        ));
    }
    output
}
