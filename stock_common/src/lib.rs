//!
//! Quote and news retrieval shared by the stock insights application.
//!
//! This crate aggregates:
//! - `error` — unified error type `LookupError` used across the workspace.
//! - `result` — handy `Result<T, LookupError>` alias.
//! - `config` — API keys and endpoint bases injected at startup.
//! - `net` — request URL construction and the blocking HTTP helpers.
//! - `model` — `Quote`, `Article` and the deduplicated `NewsSelection`.
//! - `quote` / `news` — the two endpoint fetchers.
//! - `source` — the `MarketData` seam the workflow depends on.
//! - `simulation` — an offline `MarketData` for demonstrations.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod model;
pub mod net;
pub mod news;
pub mod quote;
pub mod result;
pub mod simulation;
pub mod source;

pub use config::Config;
pub use error::LookupError;
pub use model::article::{Article, NewsSelection};
pub use model::quote::{Quote, QuoteLabels};
pub use result::Result;
pub use source::{HttpMarketData, MarketData};
