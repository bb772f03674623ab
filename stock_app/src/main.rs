//! Stock Insights — look up a ticker symbol and show its quote with the latest
//! distinct headlines.
//!
//! Each submission fetches a quote from Financial Modeling Prep and, when that
//! succeeds, up to five deduplicated articles from NewsData. Results are drawn
//! to the terminal by a single display loop; the HTTP calls run on worker threads.
//!
//! Usage example (CLI):
//! ```bash
//! FMP_API_KEY=... CURRENTS_API_KEY=... stock_app
//! stock_app --symbol TSLA
//! stock_app --simulate
//! ```
//!
//! Keys may also be placed in a `.env` file in the working directory.
#![warn(missing_docs)]
mod args;
mod input;
mod panel;
mod workflow;

use crate::args::Args;
use crate::input::{InputEvent, InputReader};
use crate::panel::TerminalPanel;
use crate::workflow::SearchWorkflow;
use clap::Parser;
use log::info;
use stock_common::simulation::SimulatedMarketData;
use stock_common::{Config, HttpMarketData, LookupError, MarketData, Result};
use std::io::{self, BufReader};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Longest wait between two updates in one-shot mode.
const ONE_SHOT_WAIT: Duration = Duration::from_secs(120);

fn main() -> Result<(), LookupError> {
    dotenvy::dotenv().ok();
    init_logger();
    let args = Args::parse();
    info!("Command line input recorded: {:?}", args);

    let source = build_source(&args)?;

    if let Some(symbol) = args.symbol.as_deref() {
        let mut workflow = SearchWorkflow::new(TerminalPanel::new(io::stdout()), source);
        let state = workflow.run_once(symbol.trim(), ONE_SHOT_WAIT)?;
        info!("Search for '{}' finished in state {}", symbol.trim(), state);
        return Ok(());
    }

    let (input_tx, input_rx) = crossbeam_channel::unbounded::<InputEvent>();
    {
        let input_tx = input_tx.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down...");
            let _ = input_tx.send(InputEvent::Quit);
        })
        .map_err(|e| LookupError::Setup(format!("Error setting Ctrl+C handler: {e}")))?;
    }
    InputReader::start(BufReader::new(io::stdin()), input_tx);

    let panel = TerminalPanel::new(io::stdout()).with_prompt();
    let mut workflow = SearchWorkflow::new(panel, source);
    workflow.run(input_rx)
}

fn build_source(args: &Args) -> Result<Arc<dyn MarketData>> {
    if args.simulate {
        info!("Simulation mode: no remote API will be called");
        return Ok(Arc::new(SimulatedMarketData::new()));
    }

    let mut config = Config::from_env()?;
    if let Some(raw) = args.quote_url.as_deref() {
        config = config.with_quote_base(Url::parse(raw)?);
    }
    if let Some(raw) = args.news_url.as_deref() {
        config = config.with_news_base(Url::parse(raw)?);
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    info!(
        "Quote endpoint: {}, news endpoint: {}",
        config.quote_base, config.news_base
    );
    Ok(Arc::new(HttpMarketData::new(&config)?))
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
