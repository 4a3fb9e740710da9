//! Configuration module for Listing-Console
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use listing_console::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("console.toml")).unwrap();
//! println!("Jobs go to: {}", config.backend.crawl_url());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    BackendConfig, Config, JobDefaults, JobLimits, OutputConfig, RenderConfig,
    DEFAULT_PLACEHOLDER_IMAGE, DEFAULT_UNKNOWN_PRICE,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
