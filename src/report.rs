//! Progress reporting for long-running steps.
//!
//! Components receive a [`Reporter`] explicitly instead of touching a
//! global status object, so library callers and tests can run them
//! silently while the CLI shows a spinner per step.

use std::cell::RefCell;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Step-level status reporting: one `start` per step, closed by either
/// `succeed` or `fail`.
pub trait Reporter {
    fn start(&self, message: &str);
    fn succeed(&self);
    fn fail(&self, message: &str);
}

/// Terminal spinner backed by indicatif.
///
/// Single-threaded use only; the pipeline never reports from more than
/// one thread.
pub struct SpinnerReporter {
    bar: RefCell<Option<ProgressBar>>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self {
            bar: RefCell::new(None),
        }
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SpinnerReporter {
    fn start(&self, message: &str) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        *self.bar.borrow_mut() = Some(bar);
    }

    fn succeed(&self) {
        if let Some(bar) = self.bar.borrow_mut().take() {
            let message = bar.message();
            bar.finish_and_clear();
            println!("✔ {message}");
        }
    }

    fn fail(&self, message: &str) {
        if let Some(bar) = self.bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
        eprintln!("✖ {message}");
    }
}

/// Discards all progress events. Used by tests and library callers.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn start(&self, _message: &str) {}
    fn succeed(&self) {}
    fn fail(&self, _message: &str) {}
}
