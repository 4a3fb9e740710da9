//! Job submission over HTTP
//!
//! This module handles the single network exchange of a job:
//! - Building the HTTP client from the backend configuration
//! - POSTing the job request as JSON
//! - Classifying the outcome into listings, a reported job error, or a
//!   transport error

use crate::config::BackendConfig;
use crate::job::response::parse_response;
use crate::job::{
    JobRequest, JobResponse, PropertyRecord, SubmitError, SubmitResult, TransportError,
};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client for talking to the crawling service
///
/// A `timeout_secs` of 0 leaves whole-request time unbounded; crawl jobs can
/// run for minutes and any limit belongs to the transport or the backend.
pub fn build_http_client(config: &BackendConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!("listing-console/{}", env!("CARGO_PKG_VERSION"));

    let mut builder = Client::builder()
        .user_agent(user_agent)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true);

    if config.timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(config.timeout_secs));
    }

    builder.build()
}

/// Sends job requests to the crawling service
///
/// Each call to [`JobSubmitter::submit`] issues exactly one request. Calls are
/// not deduplicated, retried, or cancelled; guarding against overlapping jobs
/// is the controller's job.
#[derive(Debug, Clone)]
pub struct JobSubmitter {
    client: Client,
    endpoint: String,
}

impl JobSubmitter {
    /// Creates a submitter for the configured backend
    pub fn new(config: &BackendConfig) -> Result<Self, TransportError> {
        let client = build_http_client(config).map_err(|source| TransportError::Network {
            url: config.crawl_url(),
            source,
        })?;
        Ok(Self::with_client(client, config.crawl_url()))
    }

    /// Creates a submitter from an existing client and endpoint URL
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The URL jobs are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits a job and returns its listings
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<PropertyRecord>)` - Listings exactly as the backend sent them
    /// * `Err(SubmitError::Job)` - The backend reported a failure
    /// * `Err(SubmitError::Transport)` - The exchange itself failed
    pub async fn submit(&self, request: &JobRequest) -> SubmitResult<Vec<PropertyRecord>> {
        match self.send(request).await? {
            JobResponse::Success { properties } => {
                tracing::info!("Job returned {} properties", properties.len());
                Ok(properties)
            }
            JobResponse::Failure { error } => {
                tracing::info!("Job failed on the backend: {}", error);
                Err(SubmitError::Job(error))
            }
        }
    }

    /// Posts the request and parses whatever the backend answers
    ///
    /// The status code alone does not decide the outcome: the backend reports
    /// job failures with an error status and a JSON body, so the body is
    /// always parsed first. Only a non-success status whose body is not a
    /// job response becomes [`TransportError::Status`].
    pub async fn send(&self, request: &JobRequest) -> Result<JobResponse, TransportError> {
        tracing::info!(
            "Submitting job to {}: query='{}', pages={}, workers={}",
            self.endpoint,
            request.query,
            request.pages,
            request.workers
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|source| TransportError::Network {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("Backend answered with HTTP {}", status.as_u16());

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        match parse_response(&body) {
            Ok(parsed) => Ok(parsed),
            Err(TransportError::Body(detail)) if !status.is_success() => {
                Err(TransportError::Status {
                    status: status.as_u16(),
                    detail,
                })
            }
            Err(e) => Err(e),
        }
    }
}
