use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Platform,
    Guide,
    Glossary,
    Resource,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Platform,
        Category::Guide,
        Category::Glossary,
        Category::Resource,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Guide => "guide",
            Self::Glossary => "glossary",
            Self::Resource => "resource",
        }
    }

    /// Human-readable label shown next to a result.
    pub fn label(self) -> &'static str {
        match self {
            Self::Platform => "AI Platform",
            Self::Guide => "Guide",
            Self::Glossary => "Glossary",
            Self::Resource => "Resource",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SearchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| SearchError::InvalidCategory(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = SearchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub category: Category,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub page: PageRecord,
    pub score: u32,
    #[serde(rename = "matchedText")]
    pub matched_text: String,
}
