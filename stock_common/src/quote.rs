//! Quote lookup against the Financial Modeling Prep quote endpoint.
//!
//! The endpoint answers with a JSON array of quote objects; only the first
//! element is used. Every failure, whether transport, status, decoding or an
//! empty array, is reported as `LookupError::QuoteNotFound` carrying the symbol.
use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::error::LookupError;
use crate::model::quote::Quote;
use crate::net;
use crate::Result;

/// Element of the quote endpoint's array. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct WireQuote {
    name: Option<String>,
    price: Option<f64>,
    volume: Option<f64>,
    pe: Option<f64>,
}

impl From<WireQuote> for Quote {
    fn from(wire: WireQuote) -> Self {
        Quote {
            name: wire.name.unwrap_or_default(),
            price: wire.price.unwrap_or_default(),
            volume: wire.volume.unwrap_or_default(),
            pe_ratio: wire.pe.unwrap_or_default(),
        }
    }
}

/// Fetches a single quote per symbol over a shared blocking client.
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    client: Client,
    base: Url,
    api_key: String,
}

impl QuoteFetcher {
    /// Reads the quote base and key from `config`.
    pub fn new(client: Client, config: &Config) -> Self {
        QuoteFetcher {
            client,
            base: config.quote_base.clone(),
            api_key: config.fmp_api_key.clone(),
        }
    }

    /// Fetches and normalizes the first quote returned for `symbol`.
    pub fn fetch(&self, symbol: &str) -> Result<Quote> {
        self.try_fetch(symbol).map_err(|e| {
            warn!("Quote lookup for '{}' failed: {}", symbol, e);
            match e {
                LookupError::QuoteNotFound { .. } => e,
                other => LookupError::quote_not_found(symbol, other),
            }
        })
    }

    fn try_fetch(&self, symbol: &str) -> Result<Quote> {
        let url = net::quote_url(&self.base, symbol, &self.api_key)?;
        let body = net::get_text(&self.client, url)?;
        debug!("Stock JSON response for '{}': {}", symbol, body);
        parse_first_quote(&body, symbol)
    }
}

/// Maps the first element of a quote array body to a `Quote`.
pub(crate) fn parse_first_quote(body: &str, symbol: &str) -> Result<Quote> {
    let items: Option<Vec<WireQuote>> = serde_json::from_str(body)?;
    items
        .and_then(|items| items.into_iter().next())
        .map(Quote::from)
        .ok_or_else(|| LookupError::quote_not_found(symbol, "empty quote list"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_element() {
        let body = r#"[
            {"symbol":"TSLA","name":"Tesla Inc.","price":319.41,"volume":73310775,"pe":175.80},
            {"symbol":"TSLA","name":"Other","price":1.0,"volume":1,"pe":1.0}
        ]"#;
        let quote = parse_first_quote(body, "TSLA").unwrap();
        assert_eq!(quote.name, "Tesla Inc.");
        assert_eq!(quote.price, 319.41);
        assert_eq!(quote.volume, 73310775.0);
        assert_eq!(quote.pe_ratio, 175.8);
    }

    #[test]
    fn null_fields_default_to_zero() {
        let quote = parse_first_quote(r#"[{"name":"Shell Co","price":2.5,"pe":null}]"#, "SHL").unwrap();
        assert_eq!(quote.pe_ratio, 0.0);
        assert_eq!(quote.volume, 0.0);
    }

    #[test]
    fn empty_array_is_not_found() {
        let err = parse_first_quote("[]", "NOPE").unwrap_err();
        assert!(matches!(err, LookupError::QuoteNotFound { ref symbol, .. } if symbol == "NOPE"));
    }

    #[test]
    fn json_null_is_not_found() {
        let err = parse_first_quote("null", "NOPE").unwrap_err();
        assert!(matches!(err, LookupError::QuoteNotFound { .. }));
    }

    #[test]
    fn error_object_fails_to_decode() {
        let body = r#"{"Error Message":"Invalid API KEY."}"#;
        assert!(matches!(
            parse_first_quote(body, "TSLA"),
            Err(LookupError::SerdeJson(_))
        ));
    }
}
