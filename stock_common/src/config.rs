//! Read-only configuration injected at startup.
//!
//! API keys come from the process environment (`FMP_API_KEY`, `CURRENTS_API_KEY`).
//! A missing key is not rejected here: the remote API answers with an
//! authentication failure, which the fetchers report like any other failure.
use std::env;
use std::time::Duration;

use log::warn;
use url::Url;

use crate::Result;

/// Environment variable holding the Financial Modeling Prep key.
pub const FMP_API_KEY_VAR: &str = "FMP_API_KEY";
/// Environment variable holding the NewsData key.
pub const CURRENTS_API_KEY_VAR: &str = "CURRENTS_API_KEY";
/// Optional override for the quote endpoint base.
pub const QUOTE_URL_VAR: &str = "FMP_QUOTE_URL";
/// Optional override for the news endpoint base.
pub const NEWS_URL_VAR: &str = "NEWSDATA_URL";

/// Default quote endpoint; the symbol is appended as the last path segment.
pub const DEFAULT_QUOTE_BASE: &str = "https://financialmodelingprep.com/api/v3/quote/";
/// Default news endpoint.
pub const DEFAULT_NEWS_BASE: &str = "https://newsdata.io/api/1/latest";

/// Endpoints, keys and transport settings for both fetchers.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key sent to the quote endpoint.
    pub fmp_api_key: String,
    /// Key sent to the news endpoint.
    pub currents_api_key: String,
    /// Quote endpoint base; the symbol becomes its last path segment.
    pub quote_base: Url,
    /// News endpoint base.
    pub news_base: Url,
    /// Overall request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Builds a configuration with explicit keys and the default endpoints.
    pub fn new(fmp_api_key: impl Into<String>, currents_api_key: impl Into<String>) -> Result<Self> {
        Ok(Config {
            fmp_api_key: fmp_api_key.into(),
            currents_api_key: currents_api_key.into(),
            quote_base: Url::parse(DEFAULT_QUOTE_BASE)?,
            news_base: Url::parse(DEFAULT_NEWS_BASE)?,
            timeout: None,
        })
    }

    /// Reads keys and optional endpoint overrides from the environment.
    pub fn from_env() -> Result<Self> {
        let fmp_api_key = read_key(FMP_API_KEY_VAR);
        let currents_api_key = read_key(CURRENTS_API_KEY_VAR);
        let mut config = Config::new(fmp_api_key, currents_api_key)?;

        if let Ok(raw) = env::var(QUOTE_URL_VAR) {
            config.quote_base = Url::parse(raw.trim())?;
        }
        if let Ok(raw) = env::var(NEWS_URL_VAR) {
            config.news_base = Url::parse(raw.trim())?;
        }
        Ok(config)
    }

    /// Replaces the quote endpoint base.
    pub fn with_quote_base(mut self, url: Url) -> Self {
        self.quote_base = url;
        self
    }

    /// Replaces the news endpoint base.
    pub fn with_news_base(mut self, url: Url) -> Self {
        self.news_base = url;
        self
    }

    /// Sets an overall request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn read_key(var: &str) -> String {
    match env::var(var) {
        Ok(value) => value,
        Err(_) => {
            warn!("{} is not set; requests will be rejected by the remote API", var);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_endpoints() {
        let config = Config::new("fmp", "currents").unwrap();
        assert_eq!(config.quote_base.as_str(), DEFAULT_QUOTE_BASE);
        assert_eq!(config.news_base.as_str(), DEFAULT_NEWS_BASE);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn builder_methods_override_fields() {
        let config = Config::new("fmp", "currents")
            .unwrap()
            .with_quote_base(Url::parse("http://127.0.0.1:9000/quote/").unwrap())
            .with_news_base(Url::parse("http://127.0.0.1:9000/news").unwrap())
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.quote_base.path(), "/quote/");
        assert_eq!(config.news_base.path(), "/news");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }
}
