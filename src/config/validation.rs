use crate::config::types::{BackendConfig, Config, JobLimits, RenderConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_backend_config(&config.backend)?;
    validate_limits(&config.limits)?;
    validate_render_config(&config.render)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the backend location
fn validate_backend_config(config: &BackendConfig) -> Result<(), ConfigError> {
    if config.base_url.is_empty() {
        return Err(ConfigError::Validation(
            "base_url cannot be empty".to_string(),
        ));
    }

    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            config.base_url
        )));
    }

    if !config.crawl_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "crawl_path must start with '/', got '{}'",
            config.crawl_path
        )));
    }

    Ok(())
}

/// Validates job bounds
fn validate_limits(limits: &JobLimits) -> Result<(), ConfigError> {
    if limits.max_pages < 1 {
        return Err(ConfigError::Validation(
            "max_pages must be >= 1".to_string(),
        ));
    }

    if limits.min_workers < 1 {
        return Err(ConfigError::Validation(
            "min_workers must be >= 1".to_string(),
        ));
    }

    if limits.min_workers > limits.max_workers {
        return Err(ConfigError::Validation(format!(
            "min_workers ({}) cannot exceed max_workers ({})",
            limits.min_workers, limits.max_workers
        )));
    }

    Ok(())
}

/// Validates rendering configuration
fn validate_render_config(config: &RenderConfig) -> Result<(), ConfigError> {
    if config.unknown_price.is_empty() {
        return Err(ConfigError::Validation(
            "unknown_price cannot be empty".to_string(),
        ));
    }

    if config.placeholder_image.is_empty() {
        return Err(ConfigError::Validation(
            "placeholder_image cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &crate::config::types::OutputConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.html_path {
        if path.is_empty() {
            return Err(ConfigError::Validation(
                "html_path cannot be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}
