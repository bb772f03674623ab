//! Search workflow: one submission, a quote lookup, then a news lookup.
//!
//! States move `Idle -> Fetching -> Displaying`, or `Fetching -> ErrorDisplayed`
//! when the quote cannot be found. Lookups run on short-lived worker threads
//! that are never joined or cancelled; workers never touch the panel. Every
//! result is sent as a `DisplayUpdate` to the loop that owns the panel, which
//! applies updates in arrival order (last write wins across overlapping searches).
//!
//! Within one search the news worker is spawned by the quote worker only after
//! the quote succeeded, so the quote call always completes before the news call
//! starts.
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, select, unbounded};
use log::{debug, info, warn};
use stock_common::news::NO_NEWS_FALLBACK;
use stock_common::{LookupError, MarketData, NewsSelection, Quote, Result};
use strum_macros::Display;

use crate::input::InputEvent;
use crate::panel::{FETCHING_STATUS, NEWS_STATUS, Panel};

/// Title of the dialog raised when a quote lookup fails.
pub const ERROR_TITLE: &str = "Lookup Error";

/// Where the most recently applied update left the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchState {
    Idle,
    Fetching,
    Displaying,
    ErrorDisplayed,
}

impl SearchState {
    /// Displaying and ErrorDisplayed both accept the next submission.
    pub fn is_settled(self) -> bool {
        matches!(self, SearchState::Displaying | SearchState::ErrorDisplayed)
    }
}

/// Message sent from a worker to the display loop.
#[derive(Debug, Clone)]
pub enum DisplayUpdate {
    QuoteLoaded { symbol: String, quote: Quote },
    QuoteFailed { symbol: String, detail: String },
    NewsLoaded { symbol: String, selection: NewsSelection },
    NewsFailed { symbol: String, detail: String },
}

/// Owns the panel and applies worker results to it.
pub struct SearchWorkflow<P: Panel> {
    panel: P,
    source: Arc<dyn MarketData>,
    updates_tx: Sender<DisplayUpdate>,
    updates_rx: Receiver<DisplayUpdate>,
    state: SearchState,
}

impl<P: Panel> SearchWorkflow<P> {
    pub fn new(panel: P, source: Arc<dyn MarketData>) -> Self {
        let (updates_tx, updates_rx) = unbounded();
        SearchWorkflow {
            panel,
            source,
            updates_tx,
            updates_rx,
            state: SearchState::Idle,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Starts a search for `symbol`. In-flight searches are left running.
    pub fn submit(&mut self, symbol: &str) {
        info!("Searching for '{}' (was {})", symbol, self.state);
        self.panel.set_news_status(FETCHING_STATUS);
        self.panel.refresh();
        self.state = SearchState::Fetching;
        spawn_quote_worker(
            Arc::clone(&self.source),
            symbol.to_string(),
            self.updates_tx.clone(),
        );
    }

    /// Applies one worker result to the panel.
    pub fn apply(&mut self, update: DisplayUpdate) {
        match update {
            DisplayUpdate::QuoteLoaded { symbol, quote } => {
                debug!("Quote for '{}' loaded", symbol);
                self.panel
                    .set_quote_fields(&quote.name, quote.price, quote.volume, quote.pe_ratio);
                self.state = SearchState::Fetching;
            }
            DisplayUpdate::NewsLoaded { symbol, selection } => {
                debug!("{} articles for '{}' loaded", selection.len(), symbol);
                self.panel.set_news_body(&selection.render());
                self.panel.set_news_status(NEWS_STATUS);
                self.state = SearchState::Displaying;
            }
            DisplayUpdate::NewsFailed { symbol, detail } => {
                info!("No news for '{}': {}", symbol, detail);
                self.panel.set_news_body(NO_NEWS_FALLBACK);
                self.panel.set_news_status(NEWS_STATUS);
                self.state = SearchState::Displaying;
            }
            DisplayUpdate::QuoteFailed { symbol, detail } => {
                warn!("Lookup of '{}' failed: {}", symbol, detail);
                self.panel.clear_quote_fields();
                self.panel.set_news_status(NEWS_STATUS);
                self.panel.set_news_body("");
                self.panel
                    .show_error(ERROR_TITLE, &format!("Couldn't find '{symbol}'"), &detail);
                self.state = SearchState::ErrorDisplayed;
            }
        }
        self.panel.refresh();
        debug!("Workflow is now {}", self.state);
    }

    /// Waits up to `timeout` for the next worker result and applies it.
    pub fn next_update(&mut self, timeout: Duration) -> Result<SearchState> {
        match self.updates_rx.recv_timeout(timeout) {
            Ok(update) => {
                self.apply(update);
                Ok(self.state)
            }
            Err(RecvTimeoutError::Timeout) => Err(LookupError::ChannelRecv(format!(
                "no update within {:?}",
                timeout
            ))),
            Err(e) => Err(LookupError::ChannelRecv(e.to_string())),
        }
    }

    /// Submits `symbol` and applies updates until the search settles.
    ///
    /// `wait` bounds the gap between two consecutive updates.
    pub fn run_once(&mut self, symbol: &str, wait: Duration) -> Result<SearchState> {
        self.submit(symbol);
        loop {
            let state = self.next_update(wait)?;
            if state.is_settled() {
                return Ok(state);
            }
        }
    }

    /// Display loop: multiplexes user input and worker results until `Quit`.
    pub fn run(&mut self, input: Receiver<InputEvent>) -> Result<()> {
        let updates = self.updates_rx.clone();
        self.panel.refresh();
        loop {
            select! {
                recv(input) -> event => match event {
                    Ok(InputEvent::Submit(symbol)) => self.submit(&symbol),
                    Ok(InputEvent::Quit) | Err(_) => {
                        info!("Leaving display loop");
                        return Ok(());
                    }
                },
                recv(updates) -> update => match update {
                    Ok(update) => self.apply(update),
                    Err(e) => return Err(LookupError::ChannelRecv(e.to_string())),
                },
            }
        }
    }
}

fn spawn_quote_worker(source: Arc<dyn MarketData>, symbol: String, tx: Sender<DisplayUpdate>) {
    thread::spawn(move || {
        let update = match source.quote(&symbol) {
            Ok(quote) => DisplayUpdate::QuoteLoaded {
                symbol: symbol.clone(),
                quote,
            },
            Err(e) => DisplayUpdate::QuoteFailed {
                symbol: symbol.clone(),
                detail: e.to_string(),
            },
        };
        let loaded = matches!(update, DisplayUpdate::QuoteLoaded { .. });
        if tx.send(update).is_err() {
            debug!("Display loop gone; dropping quote for '{}'", symbol);
            return;
        }
        if loaded {
            spawn_news_worker(source, symbol, tx);
        }
    });
}

fn spawn_news_worker(source: Arc<dyn MarketData>, symbol: String, tx: Sender<DisplayUpdate>) {
    thread::spawn(move || {
        let update = match source.news(&symbol) {
            Ok(selection) => DisplayUpdate::NewsLoaded {
                symbol: symbol.clone(),
                selection,
            },
            Err(e) => DisplayUpdate::NewsFailed {
                symbol: symbol.clone(),
                detail: e.to_string(),
            },
        };
        if tx.send(update).is_err() {
            debug!("Display loop gone; dropping news for '{}'", symbol);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::PanelState;
    use stock_common::{Article, QuoteLabels};

    const WAIT: Duration = Duration::from_secs(5);

    /// Canned results keyed by nothing: every symbol gets the same answers.
    struct FakeMarket {
        quote: Option<Quote>,
        news: Option<Vec<Article>>,
    }

    impl MarketData for FakeMarket {
        fn quote(&self, symbol: &str) -> Result<Quote> {
            self.quote
                .clone()
                .ok_or_else(|| LookupError::quote_not_found(symbol, "empty quote list"))
        }

        fn news(&self, symbol: &str) -> Result<NewsSelection> {
            match &self.news {
                Some(articles) => Ok(NewsSelection::select_unique(articles.clone())),
                None => Err(LookupError::news_unavailable(symbol, "timed out")),
            }
        }
    }

    fn tesla() -> Quote {
        Quote {
            name: "Tesla Inc.".to_string(),
            price: 319.41,
            volume: 73310775.0,
            pe_ratio: 175.80,
        }
    }

    fn workflow(market: FakeMarket) -> SearchWorkflow<PanelState> {
        SearchWorkflow::new(PanelState::default(), Arc::new(market))
    }

    #[test]
    fn submit_shows_fetching_status() {
        let mut wf = workflow(FakeMarket { quote: Some(tesla()), news: Some(vec![]) });
        wf.submit("TSLA");
        assert_eq!(wf.state(), SearchState::Fetching);
        assert_eq!(wf.panel().news_status, FETCHING_STATUS);
    }

    #[test]
    fn quote_then_news_reaches_displaying() {
        let mut wf = workflow(FakeMarket {
            quote: Some(tesla()),
            news: Some(vec![
                Article::new("A", "L1"),
                Article::new("A", "L2"),
                Article::new("B", "L3"),
            ]),
        });

        assert_eq!(wf.run_once("TSLA", WAIT).unwrap(), SearchState::Displaying);
        let panel = wf.panel();
        assert_eq!(panel.quote, tesla().labels());
        assert_eq!(panel.quote.pe, "PE Ratio: 175.8");
        assert_eq!(panel.news_body, "A\n\tL1\n\nB\n\tL3\n\n");
        assert_eq!(panel.news_status, NEWS_STATUS);
        assert!(panel.errors.is_empty());
    }

    #[test]
    fn missing_quote_resets_fields_and_shows_error() {
        let mut wf = workflow(FakeMarket { quote: None, news: None });
        wf.apply(DisplayUpdate::QuoteLoaded { symbol: "OLD".into(), quote: tesla() });
        wf.apply(DisplayUpdate::NewsLoaded {
            symbol: "OLD".into(),
            selection: NewsSelection::select_unique(vec![Article::new("x", "y")]),
        });

        assert_eq!(wf.run_once("NOPE", WAIT).unwrap(), SearchState::ErrorDisplayed);
        let panel = wf.panel();
        assert_eq!(panel.quote, QuoteLabels::placeholders());
        assert_eq!(panel.news_body, "");
        assert_eq!(panel.news_status, NEWS_STATUS);
        assert_eq!(panel.errors.len(), 1);
        assert_eq!(panel.errors[0].title, ERROR_TITLE);
        assert_eq!(panel.errors[0].header, "Couldn't find 'NOPE'");
        assert!(panel.errors[0].detail.contains("NOPE"));
    }

    #[test]
    fn failed_news_keeps_quote_and_shows_fallback() {
        let mut wf = workflow(FakeMarket { quote: Some(tesla()), news: None });

        assert_eq!(wf.run_once("TSLA", WAIT).unwrap(), SearchState::Displaying);
        let panel = wf.panel();
        assert_eq!(panel.quote.name, "Name: Tesla Inc.");
        assert_eq!(panel.news_body, "No latest news on query");
        assert!(panel.errors.is_empty());
    }

    #[test]
    fn late_update_overwrites_earlier_one() {
        let mut wf = workflow(FakeMarket { quote: None, news: None });
        let other = Quote { name: "Apple Inc.".into(), price: 1.0, volume: 2.0, pe_ratio: 3.0 };
        wf.apply(DisplayUpdate::QuoteLoaded { symbol: "TSLA".into(), quote: tesla() });
        wf.apply(DisplayUpdate::QuoteLoaded { symbol: "AAPL".into(), quote: other });
        assert_eq!(wf.panel().quote.name, "Name: Apple Inc.");
    }

    #[test]
    fn run_applies_updates_until_quit() {
        let mut wf = workflow(FakeMarket { quote: Some(tesla()), news: None });
        let (tx, rx) = unbounded();
        tx.send(InputEvent::Submit("TSLA".into())).unwrap();

        let handle = thread::spawn(move || {
            wf.run(rx).unwrap();
            wf
        });
        // Give the workers time to report before asking the loop to stop.
        thread::sleep(Duration::from_millis(500));
        tx.send(InputEvent::Quit).unwrap();

        let wf = handle.join().unwrap();
        assert_eq!(wf.state(), SearchState::Displaying);
        assert_eq!(wf.panel().news_body, "No latest news on query");
    }
}
