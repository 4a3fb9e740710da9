use serde::Deserialize;

/// Default unknown-price sentinel reported by the backend
pub const DEFAULT_UNKNOWN_PRICE: &str = "Hubungi Agen";

/// Default placeholder shown when a listing has no usable image
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x600?text=No+Image";

/// Main configuration structure for Listing-Console
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub job: JobDefaults,
    #[serde(default)]
    pub limits: JobLimits,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Builds a configuration pointing at `base_url` with every other
    /// section left at its default
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            backend: BackendConfig {
                base_url: base_url.into(),
                crawl_path: default_crawl_path(),
                timeout_secs: 0,
                connect_timeout_secs: default_connect_timeout(),
            },
            job: JobDefaults::default(),
            limits: JobLimits::default(),
            render: RenderConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Crawling service location
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the crawling service (e.g. "http://localhost:5000")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the job endpoint, appended to the base URL
    #[serde(rename = "crawl-path", default = "default_crawl_path")]
    pub crawl_path: String,

    /// Whole-request timeout in seconds; 0 leaves requests unbounded
    #[serde(rename = "timeout-secs", default)]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl BackendConfig {
    /// Full URL of the job endpoint
    pub fn crawl_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.crawl_path)
    }
}

/// Parameters used when the command line does not supply them
#[derive(Debug, Clone, Deserialize)]
pub struct JobDefaults {
    #[serde(default = "default_query")]
    pub query: String,

    #[serde(default = "default_pages")]
    pub pages: u32,

    #[serde(default = "default_workers")]
    pub workers: u32,
}

impl Default for JobDefaults {
    fn default() -> Self {
        Self {
            query: default_query(),
            pages: default_pages(),
            workers: default_workers(),
        }
    }
}

/// Bounds enforced on a job request before it is submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct JobLimits {
    /// Upper bound on result pages per job
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,

    /// Lower end of the worker range
    #[serde(rename = "min-workers", default = "default_min_workers")]
    pub min_workers: u32,

    /// Upper end of the worker range
    #[serde(rename = "max-workers", default = "default_max_workers")]
    pub max_workers: u32,
}

impl Default for JobLimits {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            min_workers: default_min_workers(),
            max_workers: default_max_workers(),
        }
    }
}

/// Rendering knobs
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Price value the backend uses when no price was found
    #[serde(rename = "unknown-price", default = "default_unknown_price")]
    pub unknown_price: String,

    /// Image shown for listings without photos
    #[serde(rename = "placeholder-image", default = "default_placeholder_image")]
    pub placeholder_image: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unknown_price: default_unknown_price(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Path of the HTML report; no report is written when unset
    #[serde(rename = "html-path", default)]
    pub html_path: Option<String>,
}

fn default_crawl_path() -> String {
    "/crawl".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_query() -> String {
    "kos".to_string()
}

fn default_pages() -> u32 {
    2
}

fn default_workers() -> u32 {
    5
}

fn default_max_pages() -> u32 {
    10
}

fn default_min_workers() -> u32 {
    1
}

fn default_max_workers() -> u32 {
    20
}

fn default_unknown_price() -> String {
    DEFAULT_UNKNOWN_PRICE.to_string()
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}
