//! Field-weighted substring scoring over the loaded index.
//!
//! Every page is scored on its own: the case-folded query is looked up as a
//! plain substring of the title, each keyword, the description and the body
//! excerpt, and the field weights are summed. Weights are fixed:
//!
//! | Field       | Weight            |
//! |-------------|-------------------|
//! | title       | 10                |
//! | keyword     | 5 per match       |
//! | description | 3                 |
//! | content     | 1                 |
//!
//! The same order decides which field supplies `matched_text`; it never
//! breaks ties. Equal scores keep index order because the final sort is
//! stable.

pub mod highlight;
pub mod query_url;
pub mod session;
pub mod snippet;

use crate::types::page::{CategoryFilter, PageRecord, ScoredResult};
use tracing::debug;

pub const TITLE_WEIGHT: u32 = 10;
pub const KEYWORD_WEIGHT: u32 = 5;
pub const DESCRIPTION_WEIGHT: u32 = 3;
pub const CONTENT_WEIGHT: u32 = 1;

/// Scores `pages` against `query` and returns the matches, best first.
///
/// An empty or whitespace-only query yields no results. Pages outside
/// `filter` are scored as zero and therefore never emitted.
pub fn score(query: &str, pages: &[PageRecord], filter: CategoryFilter) -> Vec<ScoredResult> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let mut results = pages
        .iter()
        .filter_map(|page| score_page(&term, page, filter))
        .collect::<Vec<_>>();
    results.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        query = %term,
        filter = %filter,
        scanned = pages.len(),
        matched = results.len(),
        "scored search query"
    );
    results
}

/// `term` must already be trimmed and case-folded.
fn score_page(term: &str, page: &PageRecord, filter: CategoryFilter) -> Option<ScoredResult> {
    let mut score = 0;
    let mut matched_text = String::new();

    if page.title.to_lowercase().contains(term) {
        score += TITLE_WEIGHT;
        matched_text = page.title.clone();
    }

    let keyword_matches = page
        .keywords
        .iter()
        .filter(|keyword| keyword.to_lowercase().contains(term))
        .map(String::as_str)
        .collect::<Vec<_>>();
    if !keyword_matches.is_empty() {
        score += KEYWORD_WEIGHT * keyword_matches.len() as u32;
        if matched_text.is_empty() {
            matched_text = keyword_matches.join(", ");
        }
    }

    if page.description.to_lowercase().contains(term) {
        score += DESCRIPTION_WEIGHT;
        if matched_text.is_empty() {
            matched_text = page.description.clone();
        }
    }

    if page.content.to_lowercase().contains(term) {
        score += CONTENT_WEIGHT;
        if matched_text.is_empty() {
            matched_text = page.content.clone();
        }
    }

    if !filter.admits(page.category) {
        score = 0;
    }

    if score == 0 {
        return None;
    }

    if matched_text.is_empty() {
        matched_text = page.description.clone();
    }

    Some(ScoredResult {
        page: page.clone(),
        score,
        matched_text,
    })
}


#[cfg(test)]
mod tests {
    use super::fixtures::{chatgpt_pages, page};
    use super::*;
    use crate::types::page::Category;
    use proptest::prelude::*;

    #[test]
    fn chatgpt_scenario_ranks_title_and_keyword_above_description() {
        let pages = chatgpt_pages();
        let results = score("chatgpt", &pages, CategoryFilter::All);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].page.url, "/a");
        assert_eq!(results[0].score, 15);
        assert_eq!(results[0].matched_text, "ChatGPT Guide");
        assert_eq!(results[1].page.url, "/b");
        assert_eq!(results[1].score, 3);
        assert_eq!(results[1].matched_text, "ChatGPT mentioned here");
    }

    #[test]
    fn empty_and_blank_queries_return_nothing() {
        let pages = chatgpt_pages();
        assert!(score("", &pages, CategoryFilter::All).is_empty());
        assert!(score("   ", &pages, CategoryFilter::All).is_empty());
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let pages = chatgpt_pages();
        let results = score("  CHATgpt \t", &pages, CategoryFilter::All);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, 15);
    }

    #[test]
    fn title_match_outranks_content_match() {
        let pages = vec![
            page("Body only", &[], "", "mentions gemini", Category::Guide, "/content"),
            page("Gemini", &[], "", "", Category::Platform, "/title"),
        ];
        let results = score("gemini", &pages, CategoryFilter::All);
        assert_eq!(results[0].page.url, "/title");
        assert_eq!(results[0].score, TITLE_WEIGHT);
        assert_eq!(results[1].page.url, "/content");
        assert_eq!(results[1].score, CONTENT_WEIGHT);
    }

    #[test]
    fn three_keyword_matches_outrank_title_match() {
        let pages = vec![
            page("Copilot", &[], "", "", Category::Platform, "/title"),
            page(
                "Assistants",
                &["copilot", "microsoft copilot", "copilot studio", "bing"],
                "",
                "",
                Category::Guide,
                "/keywords",
            ),
        ];
        let results = score("copilot", &pages, CategoryFilter::All);
        assert_eq!(results[0].page.url, "/keywords");
        assert_eq!(results[0].score, 15);
        assert_eq!(
            results[0].matched_text,
            "copilot, microsoft copilot, copilot studio"
        );
        assert_eq!(results[1].score, 10);
    }

    #[test]
    fn matched_text_follows_field_priority() {
        let pages = vec![page(
            "Unrelated",
            &[],
            "Voice search basics",
            "voice assistants read answers aloud",
            Category::Resource,
            "/voice",
        )];
        let results = score("voice", &pages, CategoryFilter::All);
        assert_eq!(results[0].score, DESCRIPTION_WEIGHT + CONTENT_WEIGHT);
        assert_eq!(results[0].matched_text, "Voice search basics");
    }

    #[test]
    fn category_filter_gates_regardless_of_score() {
        let pages = chatgpt_pages();
        let results = score("chatgpt", &pages, CategoryFilter::Only(Category::Platform));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].page.url, "/b");

        let none = score("chatgpt", &pages, CategoryFilter::Only(Category::Glossary));
        assert!(none.is_empty());
    }

    #[test]
    fn equal_scores_keep_index_order() {
        let pages = vec![
            page("Schema one", &[], "", "", Category::Glossary, "/1"),
            page("Schema two", &[], "", "", Category::Glossary, "/2"),
            page("Schema three", &[], "", "", Category::Glossary, "/3"),
        ];
        let urls = score("schema", &pages, CategoryFilter::All)
            .into_iter()
            .map(|result| result.page.url)
            .collect::<Vec<_>>();
        assert_eq!(urls, vec!["/1", "/2", "/3"]);
    }

    #[test]
    fn scoring_does_not_mutate_pages() {
        let pages = chatgpt_pages();
        let before = pages.clone();
        let _ = score("chatgpt", &pages, CategoryFilter::All);
        assert_eq!(pages, before);
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn arb_page() -> impl Strategy<Value = PageRecord> {
        (
            "[a-cA-C ]{0,8}",
            prop::collection::vec("[a-c]{0,4}", 0..4),
            "[a-cA-C ]{0,12}",
            "[a-c ]{0,16}",
            arb_category(),
            "/[a-z]{1,6}",
        )
            .prop_map(|(title, keywords, description, content, category, url)| PageRecord {
                title,
                description,
                content,
                keywords,
                category,
                url,
            })
    }

    proptest! {
        #[test]
        fn emitted_results_always_have_positive_score(
            pages in prop::collection::vec(arb_page(), 0..12),
            query in "[a-cA-C ]{0,3}",
        ) {
            for result in score(&query, &pages, CategoryFilter::All) {
                prop_assert!(result.score > 0);
                prop_assert!(!result.matched_text.is_empty());
            }
        }

        #[test]
        fn results_are_sorted_by_descending_score(
            pages in prop::collection::vec(arb_page(), 0..12),
            query in "[a-c]{1,2}",
        ) {
            let results = score(&query, &pages, CategoryFilter::All);
            prop_assert!(results.windows(2).all(|pair| pair[0].score >= pair[1].score));
        }

        #[test]
        fn category_filter_is_a_projection_of_unfiltered_results(
            pages in prop::collection::vec(arb_page(), 0..12),
            query in "[a-c]{1,2}",
            category in arb_category(),
        ) {
            let filtered = score(&query, &pages, CategoryFilter::Only(category));
            let projected = score(&query, &pages, CategoryFilter::All)
                .into_iter()
                .filter(|result| result.page.category == category)
                .collect::<Vec<_>>();
            prop_assert_eq!(filtered, projected);
        }
    }
}
