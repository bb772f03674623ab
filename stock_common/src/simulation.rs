//! Offline data source for demonstrations without API keys.
//!
//! Quotes follow a small random walk around a per-symbol base price, so repeated
//! searches show movement. News is a canned list that contains a duplicate
//! headline, which exercises the same deduplication as the live path.
use std::collections::HashMap;
use std::sync::Mutex;

use log::debug;
use rand::Rng;

use crate::error::LookupError;
use crate::model::article::{Article, NewsSelection};
use crate::model::quote::Quote;
use crate::source::MarketData;
use crate::Result;

const INITIAL_PRICE: f64 = 100.0;

/// Canned market data. Symbols in `unknown` fail like a missing quote would.
pub struct SimulatedMarketData {
    last_prices: Mutex<HashMap<String, f64>>,
    unknown: Vec<String>,
}

impl SimulatedMarketData {
    /// Every non-empty symbol is known.
    pub fn new() -> Self {
        SimulatedMarketData {
            last_prices: Mutex::new(HashMap::new()),
            unknown: Vec::new(),
        }
    }

    /// Marks `symbol` as one the simulated quote endpoint does not know.
    pub fn with_unknown(mut self, symbol: impl Into<String>) -> Self {
        self.unknown.push(symbol.into());
        self
    }

    /// Next price in a random walk of at most ±1% around `current_price`.
    pub fn next_price(current_price: f64) -> f64 {
        let mut rng = rand::rng();
        let change: f64 = rng.random_range(-0.01..0.01);
        (current_price * (1.0 + change)).max(0.01)
    }
}

impl Default for SimulatedMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketData for SimulatedMarketData {
    fn quote(&self, symbol: &str) -> Result<Quote> {
        if symbol.is_empty() || self.unknown.iter().any(|u| u == symbol) {
            return Err(LookupError::quote_not_found(symbol, "simulation has no such symbol"));
        }

        let price = {
            let mut prices = self
                .last_prices
                .lock()
                .map_err(|e| LookupError::quote_not_found(symbol, e))?;
            let last = prices.get(symbol).copied().unwrap_or(INITIAL_PRICE);
            let next = Self::next_price(last);
            prices.insert(symbol.to_string(), next);
            next
        };
        let mut rng = rand::rng();
        let volume = 1_000_000.0 + f64::from(rng.random_range(0..5_000_000u32));
        let quote = Quote {
            name: format!("{} Holdings (simulated)", symbol.to_uppercase()),
            price: (price * 100.0).round() / 100.0,
            volume,
            pe_ratio: 25.0,
        };
        debug!("Simulated quote for '{}': {:?}", symbol, quote);
        Ok(quote)
    }

    fn news(&self, symbol: &str) -> Result<NewsSelection> {
        let upper = symbol.to_uppercase();
        let canned = vec![
            Article::new(
                format!("{upper} shares move ahead of earnings"),
                "https://example.com/news/earnings-preview",
            ),
            Article::new(
                format!("{upper} shares move ahead of earnings"),
                "https://example.com/news/earnings-preview-syndicated",
            ),
            Article::new(
                format!("Analysts revisit price targets for {upper}"),
                "https://example.com/news/price-targets",
            ),
            Article::new(
                format!("What the options market says about {upper}"),
                "https://example.com/news/options",
            ),
        ];
        Ok(NewsSelection::select_unique(canned))
    }
}
