//! Latest-news lookup against the NewsData endpoint.
//!
//! The response is an object with a `results` list; articles are deduplicated by
//! title and capped (see `NewsSelection::select_unique`). Any failure, including
//! an empty or missing list, is reported as `LookupError::NewsUnavailable`.
use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::error::LookupError;
use crate::model::article::{Article, NewsSelection};
use crate::net;
use crate::Result;

/// Text shown in place of the news body when no articles could be fetched.
pub const NO_NEWS_FALLBACK: &str = "No latest news on query";

#[derive(Debug, Deserialize)]
struct WireNewsResponse {
    results: Option<Vec<WireArticle>>,
}

#[derive(Debug, Deserialize)]
struct WireArticle {
    title: Option<String>,
    link: Option<String>,
}

/// Fetches the latest headlines mentioning a symbol.
#[derive(Debug, Clone)]
pub struct NewsFetcher {
    client: Client,
    base: Url,
    api_key: String,
}

impl NewsFetcher {
    /// Reads the news base and key from `config`.
    pub fn new(client: Client, config: &Config) -> Self {
        NewsFetcher {
            client,
            base: config.news_base.clone(),
            api_key: config.currents_api_key.clone(),
        }
    }

    /// Fetches, deduplicates and caps the articles returned for `symbol`.
    pub fn fetch(&self, symbol: &str) -> Result<NewsSelection> {
        self.try_fetch(symbol).map_err(|e| {
            warn!("News lookup for '{}' failed: {}", symbol, e);
            match e {
                LookupError::NewsUnavailable { .. } => e,
                other => LookupError::news_unavailable(symbol, other),
            }
        })
    }

    fn try_fetch(&self, symbol: &str) -> Result<NewsSelection> {
        let url = net::news_url(&self.base, symbol, &self.api_key);
        let body = net::get_text(&self.client, url)?;
        let selection = parse_news(&body, symbol)?;
        debug!("Selected {} unique articles for '{}'", selection.len(), symbol);
        Ok(selection)
    }
}

/// Decodes a news body and applies title deduplication.
///
/// Articles without a title are skipped; a missing link renders as empty.
pub(crate) fn parse_news(body: &str, symbol: &str) -> Result<NewsSelection> {
    let response: Option<WireNewsResponse> = serde_json::from_str(body)?;
    let results = response
        .and_then(|r| r.results)
        .filter(|results| !results.is_empty())
        .ok_or_else(|| LookupError::news_unavailable(symbol, "empty results"))?;

    let articles = results.into_iter().filter_map(|raw| {
        let title = raw.title?;
        Some(Article::new(title, raw.link.unwrap_or_default()))
    });

    let selection = NewsSelection::select_unique(articles);
    if selection.is_empty() {
        return Err(LookupError::news_unavailable(symbol, "no titled articles"));
    }
    Ok(selection)
}
