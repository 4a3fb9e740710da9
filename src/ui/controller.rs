//! Job controller - the idle/pending cycle behind the submission trigger
//!
//! One activation of the trigger:
//! - Disables the trigger and shows the loading indicator
//! - Reads the form and validates the request
//! - Submits the job and renders the listings with the submitted worker count
//! - Shows the results or notifies the failure
//! - Hides the loading indicator and re-enables the trigger on every path

use crate::config::{Config, JobLimits};
use crate::job::{JobRequest, JobSubmitter};
use crate::render::{RenderedOutput, ResultsRenderer};
use crate::ui::UiSurface;
use crate::ConsoleError;
use std::sync::atomic::{AtomicBool, Ordering};

/// Drives jobs from a [`UiSurface`]
///
/// The trigger flag is the only mutual exclusion: activating the controller
/// while its own job is outstanding fails with [`ConsoleError::Busy`] and
/// sends nothing. Calling the [`JobSubmitter`] directly bypasses it.
pub struct Controller<S: UiSurface> {
    submitter: JobSubmitter,
    renderer: ResultsRenderer,
    limits: JobLimits,
    surface: S,
    trigger_enabled: AtomicBool,
}

impl<S: UiSurface> Controller<S> {
    /// Creates a controller from its parts
    pub fn new(
        submitter: JobSubmitter,
        renderer: ResultsRenderer,
        limits: JobLimits,
        surface: S,
    ) -> Self {
        Self {
            submitter,
            renderer,
            limits,
            surface,
            trigger_enabled: AtomicBool::new(true),
        }
    }

    /// Creates a controller wired from configuration
    pub fn from_config(config: &Config, surface: S) -> Result<Self, ConsoleError> {
        let submitter = JobSubmitter::new(&config.backend).map_err(crate::job::SubmitError::from)?;
        let renderer = ResultsRenderer::from_config(&config.render);
        Ok(Self::new(submitter, renderer, config.limits, surface))
    }

    /// The injected surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns true when no job started by this controller is outstanding
    pub fn is_idle(&self) -> bool {
        self.trigger_enabled.load(Ordering::SeqCst)
    }

    /// Runs one job from the current form values
    ///
    /// # Returns
    ///
    /// * `Ok(RenderedOutput)` - The job succeeded and its results are shown
    /// * `Err(ConsoleError::Busy)` - A job from this controller is in flight
    /// * `Err(_)` - The job failed; the surface has been notified
    pub async fn activate(&self) -> Result<RenderedOutput, ConsoleError> {
        if self
            .trigger_enabled
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::warn!("Ignoring activation while a job is in progress");
            return Err(ConsoleError::Busy);
        }

        let mut guard = TriggerGuard {
            trigger: &self.trigger_enabled,
            surface: &self.surface,
            settled: false,
        };

        self.surface.set_trigger_enabled(false);
        self.surface.set_loading(true);
        self.surface.set_results_visible(false);

        // Captured once so later form changes cannot leak into this job's stats
        let request = self.surface.job_request();
        let outcome = self.run_job(&request).await;

        match &outcome {
            Ok(output) => {
                self.surface.set_loading(false);
                self.surface.set_results_visible(true);
                tracing::info!(
                    "Rendered {} properties from {} workers",
                    output.stats.count,
                    output.stats.workers
                );
            }
            Err(e) => {
                self.surface.notify(&e.to_string());
                self.surface.set_loading(false);
            }
        }
        guard.settled = true;

        outcome
    }

    async fn run_job(&self, request: &JobRequest) -> Result<RenderedOutput, ConsoleError> {
        request.validate(&self.limits)?;

        let properties = self.submitter.submit(request).await?;
        let output = self.renderer.render(&properties, request.workers);
        self.surface.show_results(&output)?;

        Ok(output)
    }
}

/// Returns the controller to idle when an activation ends
///
/// Also runs when the activation future is dropped mid-job, in which case
/// the loading indicator has not been hidden yet.
struct TriggerGuard<'a, S: UiSurface> {
    trigger: &'a AtomicBool,
    surface: &'a S,
    settled: bool,
}

impl<S: UiSurface> Drop for TriggerGuard<'_, S> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("Job abandoned before completion");
            self.surface.set_loading(false);
        }
        self.trigger.store(true, Ordering::SeqCst);
        self.surface.set_trigger_enabled(true);
    }
}
