use super::{no_results_label, previews, stats_label, RenderOptions, NOT_SEARCHED_LABEL};
use crate::search::session::SearchOutcome;

pub fn to_markdown(outcome: &SearchOutcome, options: &RenderOptions) -> String {
    let mut output = String::new();
    output.push_str("# Search Results\n\n");

    let (query, filter, results) = match outcome {
        SearchOutcome::NotSearched { .. } => {
            output.push_str(&format!("{NOT_SEARCHED_LABEL}\n"));
            return output;
        }
        SearchOutcome::NoMatches { query, filter } => {
            output.push_str(&format!("{}\n", no_results_label(query, *filter)));
            return output;
        }
        SearchOutcome::Matches {
            query,
            filter,
            results,
        } => (query, *filter, results),
    };

    output.push_str(&format!("{}\n\n", stats_label(results.len(), query, filter)));
    for preview in previews(results, query, options) {
        output.push_str(&format!("## [{}]({})\n\n", preview.title, preview.link));
        output.push_str(&format!(
            "- category: {}\n- score: {}\n\n",
            preview.result.page.category.label(),
            preview.result.score
        ));
        output.push_str(&format!("> {}\n\n", preview.snippet));
    }

    output
}
