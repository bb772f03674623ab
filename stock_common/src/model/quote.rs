//! Normalized quote record and the labels of the company-info block.
//!
//! A `Quote` is recomputed on every search and never persisted.
use serde::{Deserialize, Serialize};

const NAME_PREFIX: &str = "Name: ";
const PRICE_PREFIX: &str = "Price: ";
const VOLUME_PREFIX: &str = "Volume: ";
const PE_PREFIX: &str = "PE Ratio: ";

/// Snapshot of a stock's name, price, volume and price/earnings ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Company name as reported by the quote endpoint.
    pub name: String,
    /// Last traded price.
    pub price: f64,
    /// Traded volume.
    pub volume: f64,
    /// Price/earnings ratio.
    pub pe_ratio: f64,
}

impl Quote {
    /// Display labels for this quote.
    pub fn labels(&self) -> QuoteLabels {
        QuoteLabels::format(&self.name, self.price, self.volume, self.pe_ratio)
    }
}

/// The four text lines of the company-info block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLabels {
    /// `Name: {name}`
    pub name: String,
    /// `Price: {price}`
    pub price: String,
    /// `Volume: {volume}`
    pub volume: String,
    /// `PE Ratio: {pe}`
    pub pe: String,
}

impl QuoteLabels {
    /// Labels shown before any search and after a failed one.
    pub fn placeholders() -> Self {
        QuoteLabels {
            name: NAME_PREFIX.to_string(),
            price: PRICE_PREFIX.to_string(),
            volume: VOLUME_PREFIX.to_string(),
            pe: PE_PREFIX.to_string(),
        }
    }

    /// Floats use Rust's shortest round-trip form (`175.8`, `73310775`).
    pub fn format(name: &str, price: f64, volume: f64, pe: f64) -> Self {
        QuoteLabels {
            name: format!("{NAME_PREFIX}{name}"),
            price: format!("{PRICE_PREFIX}{price}"),
            volume: format!("{VOLUME_PREFIX}{volume}"),
            pe: format!("{PE_PREFIX}{pe}"),
        }
    }
}

impl Default for QuoteLabels {
    fn default() -> Self {
        QuoteLabels::placeholders()
    }
}
