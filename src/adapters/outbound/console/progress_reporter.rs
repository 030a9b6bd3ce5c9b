use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting scan progress to stderr
///
/// This adapter implements the ProgressReporter port. Messages go to stderr
/// so a report written to stdout-redirected files stays clean. Project-level
/// progress is drawn with an indicatif bar; messages printed while the bar is
/// visible are written above it.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: false,
        }
    }

    /// Reporter that only prints warnings and errors
    pub fn quiet() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: true,
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            pb.set_length(total as u64);
            pb.clone()
        } else {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} projects - {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-"),
            );
            *pb_option = Some(pb.clone());
            pb
        }
    }

    fn emit(&self, line: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| eprintln!("{}", line)),
            _ => eprintln!("{}", line),
        }
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            self.emit(message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_warning(&self, message: &str) {
        self.emit(&format!("{}", message.yellow()));
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        if !self.quiet {
            eprintln!();
            eprintln!("{}", message.green());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily capture stderr, but verify nothing panics
        reporter.report("Test message");
        reporter.report_progress(5, 10, Some("platform/billing"));
        reporter.report_warning("Test warning");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_progress_bar_reused_across_updates() {
        let reporter = StderrProgressReporter::new();
        reporter.report_progress(1, 3, None);
        reporter.report_progress(2, 4, Some("next"));

        let pb = reporter.progress_bar.borrow();
        let pb = pb.as_ref().unwrap();
        assert_eq!(pb.length(), Some(4));
        assert_eq!(pb.position(), 2);
    }

    #[test]
    fn test_quiet_reporter_skips_progress_bar() {
        let reporter = StderrProgressReporter::quiet();
        reporter.report("hidden");
        reporter.report_progress(1, 2, Some("hidden"));
        assert!(reporter.progress_bar.borrow().is_none());
        reporter.report_warning("still shown");
    }

    #[test]
    fn test_completion_clears_progress_bar() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(1, 1, None);
        reporter.report_completion("done");
        assert!(reporter.progress_bar.borrow().is_none());
    }
}
