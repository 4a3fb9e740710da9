//! Job module: composing, submitting, and decoding crawl jobs
//!
//! This module contains everything on the request side of a job:
//! - The job request and its client-side validation
//! - The response wire format and property records
//! - The HTTP submitter and its error taxonomy

mod request;
mod response;
mod submitter;

pub use request::{JobRequest, ValidationError};
pub use response::{parse_response, JobResponse, PropertyRecord};
pub use submitter::{build_http_client, JobSubmitter};

use thiserror::Error;

/// Failures of the exchange itself, as opposed to a job the backend rejected
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("backend returned HTTP {status} without a job response: {detail}")]
    Status { status: u16, detail: String },

    #[error("unreadable response body: {0}")]
    Body(String),

    #[error("malformed job response: {0}")]
    Protocol(String),
}

impl TransportError {
    /// Returns true when no response was received at all
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

/// Terminal outcome of a submission that did not produce listings
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The backend answered `success: false` with this message
    #[error("Error: {0}")]
    Job(String),

    #[error("Error connecting to server: {0}")]
    Transport(#[from] TransportError),
}

/// Result type for job submissions
pub type SubmitResult<T> = Result<T, SubmitError>;
