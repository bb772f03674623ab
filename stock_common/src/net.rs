//! HTTP plumbing shared by the quote and news fetchers.
//!
//! Both endpoints are plain GET requests authenticated with an `apikey` query
//! parameter. Requests are blocking: callers run them on worker threads.
use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::config::Config;
use crate::error::LookupError;
use crate::Result;

/// Query parameter carrying the API key on both endpoints.
pub const API_KEY_PARAM: &str = "apikey";
/// Language filter sent to the news endpoint.
pub const NEWS_LANGUAGE: &str = "en";

/// Builds the blocking client used by both fetchers.
pub fn build_client(config: &Config) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// `{quote_base}/{symbol}?apikey={key}` with the symbol percent-encoded as a path segment.
pub fn quote_url(base: &Url, symbol: &str, api_key: &str) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| LookupError::InvalidBase(base.to_string()))?
        .pop_if_empty()
        .push(symbol);
    url.query_pairs_mut().append_pair(API_KEY_PARAM, api_key);
    Ok(url)
}

/// `{news_base}?apikey={key}&q={symbol}&language=en`.
pub fn news_url(base: &Url, symbol: &str, api_key: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair(API_KEY_PARAM, api_key)
        .append_pair("q", symbol)
        .append_pair("language", NEWS_LANGUAGE);
    url
}

/// Copy of `url` safe to log: the API key value is replaced.
pub fn redact(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    if pairs.is_empty() {
        return shown.to_string();
    }
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}

/// GETs `url` and returns the body when the status is a success.
pub fn get_text(client: &Client, url: Url) -> Result<String> {
    let shown = redact(&url);
    debug!("GET {}", shown);
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status {
            status: status.as_u16(),
            url: shown,
        });
    }
    let body = response.text()?;
    debug!("{} answered {} bytes", shown, body.len());
    Ok(body)
}
