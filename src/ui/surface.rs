//! The user-facing surface the controller drives
//!
//! The controller never reaches for global UI state. Everything it reads or
//! changes goes through a [`UiSurface`] handed to it at construction.

use crate::job::JobRequest;
use crate::render::{write_html_report, RenderError, RenderedOutput};
use std::path::PathBuf;

/// Capability over the form, loading indicator, trigger, and results region
///
/// Methods take `&self`; implementations that record state use interior
/// mutability.
pub trait UiSurface {
    /// Reads the current form values as a job request
    fn job_request(&self) -> JobRequest;

    /// Shows or hides the loading indicator
    fn set_loading(&self, loading: bool);

    /// Enables or disables the submission trigger
    fn set_trigger_enabled(&self, enabled: bool);

    /// Shows or hides the results region
    fn set_results_visible(&self, visible: bool);

    /// Replaces the results region with `output`
    fn show_results(&self, output: &RenderedOutput) -> Result<(), RenderError>;

    /// Blocking notification of a failed job
    fn notify(&self, message: &str);
}

/// Command-line surface: log lines for progress, stdout and an optional HTML
/// file for results
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    request: JobRequest,
    print_text: bool,
    html_path: Option<PathBuf>,
}

impl TerminalSurface {
    /// Creates a surface whose form holds `request`
    pub fn new(request: JobRequest) -> Self {
        Self {
            request,
            print_text: true,
            html_path: None,
        }
    }

    /// Sets whether the text report is printed to stdout
    pub fn with_text_output(mut self, print_text: bool) -> Self {
        self.print_text = print_text;
        self
    }

    /// Writes an HTML report to `path` after every successful job
    pub fn with_html_path(mut self, path: Option<PathBuf>) -> Self {
        self.html_path = path;
        self
    }
}

impl UiSurface for TerminalSurface {
    fn job_request(&self) -> JobRequest {
        self.request.clone()
    }

    fn set_loading(&self, loading: bool) {
        if loading {
            tracing::info!("Crawling... this may take a few minutes");
        } else {
            tracing::debug!("Loading indicator hidden");
        }
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        tracing::debug!("Trigger {}", if enabled { "enabled" } else { "disabled" });
    }

    fn set_results_visible(&self, visible: bool) {
        tracing::debug!("Results region {}", if visible { "shown" } else { "hidden" });
    }

    fn show_results(&self, output: &RenderedOutput) -> Result<(), RenderError> {
        if self.print_text {
            println!("{}", output.to_text());
        }

        if let Some(path) = &self.html_path {
            write_html_report(output, path)?;
            println!("✓ HTML report written to: {}", path.display());
        }

        Ok(())
    }

    fn notify(&self, message: &str) {
        tracing::error!("{}", message);
        eprintln!("{}", message);
    }
}
