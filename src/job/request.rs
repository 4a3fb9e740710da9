//! Job request composition and client-side validation

use crate::config::{JobDefaults, JobLimits};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a job request is rejected before it reaches the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("search query cannot be empty")]
    EmptyQuery,

    #[error("pages must be between 1 and {max}, got {pages}")]
    PagesOutOfRange { pages: u32, max: u32 },

    #[error("workers must be between {min} and {max}, got {workers}")]
    WorkersOutOfRange { workers: u32, min: u32, max: u32 },
}

/// One crawl job as sent to the backend
///
/// A request is built fresh for every submission and never stored. The
/// serialized form is the request body: `{ "query", "pages", "workers" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequest {
    /// Search query, sent verbatim
    pub query: String,

    /// Number of search result pages to crawl
    pub pages: u32,

    /// Backend worker count
    pub workers: u32,
}

impl JobRequest {
    /// Creates a new job request
    pub fn new(query: impl Into<String>, pages: u32, workers: u32) -> Self {
        Self {
            query: query.into(),
            pages,
            workers,
        }
    }

    /// Builds a request from configured defaults, letting any supplied value
    /// take precedence
    pub fn from_defaults(
        defaults: &JobDefaults,
        query: Option<String>,
        pages: Option<u32>,
        workers: Option<u32>,
    ) -> Self {
        Self {
            query: query.unwrap_or_else(|| defaults.query.clone()),
            pages: pages.unwrap_or(defaults.pages),
            workers: workers.unwrap_or(defaults.workers),
        }
    }

    /// Checks the request against the configured bounds
    ///
    /// A query made only of whitespace counts as empty, but a valid query is
    /// still submitted untrimmed.
    pub fn validate(&self, limits: &JobLimits) -> Result<(), ValidationError> {
        if self.query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        if self.pages < 1 || self.pages > limits.max_pages {
            return Err(ValidationError::PagesOutOfRange {
                pages: self.pages,
                max: limits.max_pages,
            });
        }

        if self.workers < limits.min_workers || self.workers > limits.max_workers {
            return Err(ValidationError::WorkersOutOfRange {
                workers: self.workers,
                min: limits.min_workers,
                max: limits.max_workers,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_body_shape() {
        let request = JobRequest::new("kos jakarta", 2, 5);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "query": "kos jakarta", "pages": 2, "workers": 5 })
        );
    }

    #[test]
    fn test_from_defaults_prefers_supplied_values() {
        let defaults = JobDefaults::default();

        let request = JobRequest::from_defaults(&defaults, None, Some(4), None);
        assert_eq!(request.query, "kos");
        assert_eq!(request.pages, 4);
        assert_eq!(request.workers, 5);
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let limits = JobLimits::default();

        assert!(JobRequest::new("kos", 1, 1).validate(&limits).is_ok());
        assert!(JobRequest::new("kos", 10, 20).validate(&limits).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_query() {
        let limits = JobLimits::default();

        assert_eq!(
            JobRequest::new("", 2, 5).validate(&limits),
            Err(ValidationError::EmptyQuery)
        );
        assert_eq!(
            JobRequest::new("   ", 2, 5).validate(&limits),
            Err(ValidationError::EmptyQuery)
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_counts() {
        let limits = JobLimits::default();

        assert!(matches!(
            JobRequest::new("kos", 0, 5).validate(&limits),
            Err(ValidationError::PagesOutOfRange { pages: 0, max: 10 })
        ));
        assert!(matches!(
            JobRequest::new("kos", 11, 5).validate(&limits),
            Err(ValidationError::PagesOutOfRange { .. })
        ));
        assert!(matches!(
            JobRequest::new("kos", 2, 0).validate(&limits),
            Err(ValidationError::WorkersOutOfRange { .. })
        ));
        assert!(matches!(
            JobRequest::new("kos", 2, 21).validate(&limits),
            Err(ValidationError::WorkersOutOfRange {
                workers: 21,
                min: 1,
                max: 20
            })
        ));
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let request = JobRequest::new("  kos  ", 2, 5);
        assert!(request.validate(&JobLimits::default()).is_ok());
        assert_eq!(request.query, "  kos  ");
    }
}
