//! Keyword search over a precomputed static-site search index.
//!
//! The index is a JSON document of page records. Queries are scored by
//! field-weighted substring matching (see [`search::score`]), optionally
//! restricted to one category, and rendered with snippets and highlights.

pub mod config;
pub mod error;
pub mod generator;
pub mod index;
pub mod report;
pub mod search;
pub mod types;
