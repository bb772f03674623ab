//! Data model types produced by the fetchers.
//!
//! - `quote` — the normalized quote record and its display labels.
//! - `article` — news articles and the deduplicated `NewsSelection`.
pub mod article;
pub mod quote;
