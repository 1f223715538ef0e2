use crate::types::page::{Category, PageRecord};
use serde::Deserialize;
use serde_json::Value;

/// Loose shape accepted from the index file before it is narrowed into a
/// `PageRecord`.
#[derive(Debug, Deserialize)]
struct RawPage {
    title: String,
    description: String,
    content: String,
    #[serde(default)]
    keywords: Vec<String>,
    category: String,
    url: String,
}

pub fn normalize_record(value: Value) -> Result<PageRecord, String> {
    let raw: RawPage = serde_json::from_value(value).map_err(|e| e.to_string())?;

    let category = raw
        .category
        .trim()
        .to_lowercase()
        .parse::<Category>()
        .map_err(|e| e.to_string())?;

    let url = raw.url.trim().to_string();
    if url.is_empty() {
        return Err("url must not be empty".to_string());
    }

    let keywords = raw
        .keywords
        .into_iter()
        .map(|keyword| keyword.trim().to_string())
        .filter(|keyword| !keyword.is_empty())
        .collect();

    Ok(PageRecord {
        title: raw.title,
        description: raw.description,
        content: raw.content,
        keywords,
        category,
        url,
    })
}
