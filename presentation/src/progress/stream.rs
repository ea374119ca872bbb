//! Streaming reply printer
//!
//! Shows a spinner until the first part of a reply arrives, then prints
//! only the newly arrived text of each accumulated update.

use crate::output::console::ConsoleFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use mentor_application::ResponseObserver;
use mentor_domain::{Module, Role};
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

/// Console [`ResponseObserver`] for one reply
pub struct StreamPrinter {
    show_spinner: bool,
    state: Mutex<PrinterState>,
}

#[derive(Default)]
struct PrinterState {
    spinner: Option<ProgressBar>,
    printed: String,
    started: bool,
}

impl PrinterState {
    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl StreamPrinter {
    pub fn new(show_spinner: bool) -> Self {
        Self {
            show_spinner,
            state: Mutex::new(PrinterState::default()),
        }
    }

    /// Remove the spinner when the reply failed and no end event follows.
    pub fn abort(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.clear_spinner();
            if state.started {
                println!();
            }
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl ResponseObserver for StreamPrinter {
    fn on_stream_start(&self, module: Module) {
        if !self.show_spinner {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(format!("{} mentor is thinking...", module.short_name()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut state) = self.state.lock() {
            state.spinner = Some(spinner);
        }
    }

    fn on_partial(&self, accumulated: &str) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        state.clear_spinner();

        let mut stdout = std::io::stdout().lock();
        if !state.started {
            let _ = write!(stdout, "{} ", ConsoleFormatter::label(Role::Assistant));
            state.started = true;
        }
        match unseen_suffix(accumulated, &state.printed) {
            Some(suffix) => {
                let _ = write!(stdout, "{}", suffix);
            }
            // The reply was replaced (quota apology after partial output)
            None => {
                let _ = write!(
                    stdout,
                    "\n{} {}",
                    ConsoleFormatter::label(Role::Assistant),
                    accumulated
                );
            }
        }
        let _ = stdout.flush();
        state.printed = accumulated.to_string();
    }

    fn on_stream_end(&self) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        state.clear_spinner();
        if state.started {
            println!();
        } else {
            println!("{} (no reply)", ConsoleFormatter::label(Role::Assistant));
        }
    }
}

/// Part of `accumulated` not printed yet, or `None` when it does not extend
/// what was printed.
fn unseen_suffix<'a>(accumulated: &'a str, printed: &str) -> Option<&'a str> {
    accumulated.strip_prefix(printed)
}
