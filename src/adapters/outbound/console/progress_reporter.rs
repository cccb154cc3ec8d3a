use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// ConsoleProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Uses indicatif for an indeterminate spinner while the engine runs.
/// In quiet mode nothing is printed and no spinner is created.
pub struct ConsoleProgressReporter {
    quiet: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            spinner: RefCell::new(None),
        }
    }
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report(&self, message: &str) {
        if self.quiet {
            return;
        }
        // Print above the spinner instead of clobbering its line
        if let Some(pb) = self.spinner.borrow().as_ref() {
            pb.println(message);
        } else {
            eprintln!("{}", message);
        }
    }

    fn begin_task(&self, description: &str) {
        if self.quiet {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Failed to set spinner template"),
        );
        pb.set_message(description.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(pb);
    }

    fn end_task(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}
