//! Data source seam used by the search workflow.
//!
//! `MarketData` is implemented by `HttpMarketData`, which talks to the real
//! endpoints, and by `SimulatedMarketData` (see `simulation`). Implementations
//! are shared across worker threads, hence the `Send + Sync` bound.
use crate::config::Config;
use crate::model::article::NewsSelection;
use crate::model::quote::Quote;
use crate::net;
use crate::news::NewsFetcher;
use crate::quote::QuoteFetcher;
use crate::Result;

/// Blocking quote and news lookups for a ticker symbol.
pub trait MarketData: Send + Sync {
    /// Fails with `LookupError::QuoteNotFound`.
    fn quote(&self, symbol: &str) -> Result<Quote>;

    /// Fails with `LookupError::NewsUnavailable`.
    fn news(&self, symbol: &str) -> Result<NewsSelection>;
}

/// Both fetchers over one shared HTTP client.
#[derive(Debug, Clone)]
pub struct HttpMarketData {
    quotes: QuoteFetcher,
    news: NewsFetcher,
}

impl HttpMarketData {
    /// Builds the shared HTTP client and both fetchers.
    pub fn new(config: &Config) -> Result<Self> {
        let client = net::build_client(config)?;
        Ok(HttpMarketData {
            quotes: QuoteFetcher::new(client.clone(), config),
            news: NewsFetcher::new(client, config),
        })
    }
}

impl MarketData for HttpMarketData {
    fn quote(&self, symbol: &str) -> Result<Quote> {
        self.quotes.fetch(symbol)
    }

    fn news(&self, symbol: &str) -> Result<NewsSelection> {
        self.news.fetch(symbol)
    }
}
