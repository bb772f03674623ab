//! Reading symbol submissions from a line-oriented input.
//!
//! A background thread turns each line into an `InputEvent` and forwards it to
//! the display loop over a channel. Blank lines are ignored; end of input or a
//! `quit`/`exit` line ends the session.
use std::io::BufRead;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use log::{debug, error, info};

/// Event delivered from the input thread to the display loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The user submitted a ticker symbol (already trimmed, never empty).
    Submit(String),
    /// The user asked to leave, or input was closed.
    Quit,
}

/// Maps one input line to an event. Returns `None` for blank lines.
pub fn parse_line(line: &str) -> Option<InputEvent> {
    let symbol = line.trim();
    if symbol.is_empty() {
        return None;
    }
    if symbol.eq_ignore_ascii_case("quit") || symbol.eq_ignore_ascii_case("exit") {
        return Some(InputEvent::Quit);
    }
    Some(InputEvent::Submit(symbol.to_string()))
}

/// Helper type owning the input thread.
pub struct InputReader;

impl InputReader {
    /// Spawns a thread that reads `reader` line by line until EOF or `quit`.
    pub fn start<R>(reader: R, tx: Sender<InputEvent>) -> JoinHandle<()>
    where
        R: BufRead + Send + 'static,
    {
        thread::spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        break;
                    }
                };
                let Some(event) = parse_line(&line) else {
                    continue;
                };
                debug!("Input event: {:?}", event);
                let quit = event == InputEvent::Quit;
                if tx.send(event).is_err() || quit {
                    return;
                }
            }
            info!("Input closed");
            let _ = tx.send(InputEvent::Quit);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn trims_and_skips_blank_lines() {
        assert_eq!(parse_line("  TSLA \n"), Some(InputEvent::Submit("TSLA".into())));
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("QUIT"), Some(InputEvent::Quit));
    }

    #[test]
    fn reader_forwards_lines_then_quits_on_eof() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let handle = InputReader::start(Cursor::new("AAPL\n\nBRK.B\n"), tx);
        handle.join().unwrap();

        let events: Vec<InputEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                InputEvent::Submit("AAPL".into()),
                InputEvent::Submit("BRK.B".into()),
                InputEvent::Quit,
            ]
        );
    }

    #[test]
    fn reader_stops_at_quit_line() {
        let (tx, rx) = crossbeam_channel::unbounded();
        InputReader::start(Cursor::new("exit\nMSFT\n"), tx).join().unwrap();
        let events: Vec<InputEvent> = rx.try_iter().collect();
        assert_eq!(events, vec![InputEvent::Quit]);
    }
}
