//! Command-line arguments for the stock insights application.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Look up a single ticker symbol, print the result and exit.
    /// Without it, symbols are read from stdin one per line.
    #[clap(long)]
    pub symbol: Option<String>,

    /// Override the quote endpoint base (defaults to Financial Modeling Prep).
    #[clap(long)]
    pub quote_url: Option<String>,

    /// Override the news endpoint base (defaults to NewsData latest news).
    #[clap(long)]
    pub news_url: Option<String>,

    /// Overall HTTP request timeout in seconds. Unset keeps the client default.
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Serve canned quotes and news instead of calling the remote APIs.
    #[clap(long)]
    pub simulate: bool,
}
