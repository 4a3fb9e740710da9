//! Listing-Console: a control surface for property crawl jobs
//!
//! This crate submits crawl jobs to a backend crawling service and renders the
//! returned property listings as summary statistics and detail cards, either
//! as a terminal report or as a standalone HTML page.

pub mod config;
pub mod job;
pub mod render;
pub mod ui;

use thiserror::Error;

/// Main error type for Listing-Console operations
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid job request: {0}")]
    Validation(#[from] job::ValidationError),

    #[error(transparent)]
    Submit(#[from] job::SubmitError),

    #[error("A crawl job is already in progress")]
    Busy,

    #[error("Render error: {0}")]
    Render(#[from] render::RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Listing-Console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use job::{JobRequest, JobResponse, JobSubmitter, PropertyRecord};
pub use render::{render, DerivedStats, RenderedCard, RenderedOutput};
pub use ui::{Controller, UiSurface};
