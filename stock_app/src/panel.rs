//! Display collaborator of the search workflow.
//!
//! The workflow only talks to the `Panel` trait. `PanelState` is the in-memory
//! model of every label; `TerminalPanel` wraps it and redraws the whole panel to
//! a writer whenever the workflow asks for a refresh.
use std::io::Write;

use chrono::{DateTime, Local};
use log::warn;
use stock_common::QuoteLabels;

/// News status shown while nothing is in flight.
pub const NEWS_STATUS: &str = "Latest News:";
/// News status shown as soon as a symbol is submitted.
pub const FETCHING_STATUS: &str = "fetching news...";
/// Prompt printed below the panel in interactive mode.
pub const PROMPT: &str = "Enter Stock ticker symbol: ";

/// Narrow interface the workflow uses to update what the user sees.
pub trait Panel {
    /// Shows a fetched quote in the company-info block.
    fn set_quote_fields(&mut self, name: &str, price: f64, volume: f64, pe: f64);

    /// Puts the company-info block back to its placeholder labels.
    fn clear_quote_fields(&mut self);

    fn set_news_status(&mut self, text: &str);

    fn set_news_body(&mut self, text: &str);

    /// Surfaces a blocking error to the user.
    fn show_error(&mut self, title: &str, header: &str, detail: &str);

    /// Called once after each batch of updates.
    fn refresh(&mut self) {}
}

/// An error shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub header: String,
    pub detail: String,
}

/// Current text of every label, plus every error shown so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub quote: QuoteLabels,
    pub news_status: String,
    pub news_body: String,
    pub errors: Vec<ErrorDialog>,
}

impl Default for PanelState {
    fn default() -> Self {
        PanelState {
            quote: QuoteLabels::placeholders(),
            news_status: NEWS_STATUS.to_string(),
            news_body: String::new(),
            errors: Vec::new(),
        }
    }
}

impl Panel for PanelState {
    fn set_quote_fields(&mut self, name: &str, price: f64, volume: f64, pe: f64) {
        self.quote = QuoteLabels::format(name, price, volume, pe);
    }

    fn clear_quote_fields(&mut self) {
        self.quote = QuoteLabels::placeholders();
    }

    fn set_news_status(&mut self, text: &str) {
        self.news_status = text.to_string();
    }

    fn set_news_body(&mut self, text: &str) {
        self.news_body = text.to_string();
    }

    fn show_error(&mut self, title: &str, header: &str, detail: &str) {
        self.errors.push(ErrorDialog {
            title: title.to_string(),
            header: header.to_string(),
            detail: detail.to_string(),
        });
    }
}

/// Text rendering of the panel, redrawn on every refresh.
pub struct TerminalPanel<W: Write> {
    state: PanelState,
    out: W,
    shown_errors: usize,
    updated_at: Option<DateTime<Local>>,
    prompt: bool,
}

impl<W: Write> TerminalPanel<W> {
    pub fn new(out: W) -> Self {
        TerminalPanel {
            state: PanelState::default(),
            out,
            shown_errors: 0,
            updated_at: None,
            prompt: false,
        }
    }

    /// Prints the input prompt after every redraw.
    pub fn with_prompt(mut self) -> Self {
        self.prompt = true;
        self
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self) -> std::io::Result<()> {
        for dialog in &self.state.errors[self.shown_errors..] {
            writeln!(self.out, "+-- {} --", dialog.title)?;
            writeln!(self.out, "| {}", dialog.header)?;
            writeln!(self.out, "| {}", dialog.detail)?;
            writeln!(self.out, "+--")?;
        }
        self.shown_errors = self.state.errors.len();

        let quote = &self.state.quote;
        writeln!(self.out, "Company Info:")?;
        writeln!(self.out, "  {}", quote.name)?;
        writeln!(self.out, "  {}", quote.price)?;
        writeln!(self.out, "  {}", quote.volume)?;
        writeln!(self.out, "  {}", quote.pe)?;
        writeln!(self.out, "{}", self.state.news_status)?;
        if !self.state.news_body.is_empty() {
            write!(self.out, "{}", self.state.news_body)?;
            if !self.state.news_body.ends_with('\n') {
                writeln!(self.out)?;
            }
        }
        if let Some(at) = self.updated_at {
            writeln!(self.out, "(quote updated {})", at.format("%H:%M:%S"))?;
        }
        if self.prompt {
            write!(self.out, "{}", PROMPT)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Panel for TerminalPanel<W> {
    fn set_quote_fields(&mut self, name: &str, price: f64, volume: f64, pe: f64) {
        self.state.set_quote_fields(name, price, volume, pe);
        self.updated_at = Some(Local::now());
    }

    fn clear_quote_fields(&mut self) {
        self.state.clear_quote_fields();
        self.updated_at = None;
    }

    fn set_news_status(&mut self, text: &str) {
        self.state.set_news_status(text);
    }

    fn set_news_body(&mut self, text: &str) {
        self.state.set_news_body(text);
    }

    fn show_error(&mut self, title: &str, header: &str, detail: &str) {
        self.state.show_error(title, header, detail);
    }

    fn refresh(&mut self) {
        if let Err(e) = self.draw() {
            warn!("Failed to draw panel: {}", e);
        }
    }
}
