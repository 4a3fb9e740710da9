//! Render module for turning job results into reports
//!
//! This module handles:
//! - Computing summary statistics for a result set
//! - Building a view model for every listing
//! - Serializing results as HTML or as a terminal report

mod card;
pub mod html;
pub mod stats;
mod text;

pub use card::{photo_badge, render_card, RenderedCard};
pub use html::{escape_html, render_fragment, render_page, write_html_report};
pub use stats::DerivedStats;
pub use text::format_text_report;

use crate::config::{RenderConfig, DEFAULT_PLACEHOLDER_IMAGE, DEFAULT_UNKNOWN_PRICE};
use crate::job::PropertyRecord;
use thiserror::Error;

/// Errors that can occur while emitting rendered output
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything needed to display one completed job
///
/// Each render produces a fresh value that replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub stats: DerivedStats,

    /// One card per listing, in backend order
    pub cards: Vec<RenderedCard>,

    /// Image to swap in when a listing photo fails to load
    pub placeholder_image: String,
}

impl RenderedOutput {
    /// The results as an HTML fragment
    pub fn to_html(&self) -> String {
        render_fragment(self)
    }

    /// The results as a terminal report
    pub fn to_text(&self) -> String {
        format_text_report(self)
    }
}

/// Turns a result set into stats and cards
#[derive(Debug, Clone)]
pub struct ResultsRenderer {
    unknown_price: String,
    placeholder_image: String,
}

impl Default for ResultsRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_UNKNOWN_PRICE, DEFAULT_PLACEHOLDER_IMAGE)
    }
}

impl ResultsRenderer {
    /// Creates a renderer with an explicit sentinel and placeholder
    pub fn new(unknown_price: impl Into<String>, placeholder_image: impl Into<String>) -> Self {
        Self {
            unknown_price: unknown_price.into(),
            placeholder_image: placeholder_image.into(),
        }
    }

    /// Creates a renderer from the `[render]` configuration section
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(&config.unknown_price, &config.placeholder_image)
    }

    /// Renders one job's listings
    ///
    /// # Arguments
    ///
    /// * `properties` - Listings in backend order; order is kept
    /// * `workers_used` - Worker count of the request that produced them
    pub fn render(&self, properties: &[PropertyRecord], workers_used: u32) -> RenderedOutput {
        RenderedOutput {
            stats: DerivedStats::compute(properties, workers_used, &self.unknown_price),
            cards: properties
                .iter()
                .map(|p| render_card(p, &self.placeholder_image))
                .collect(),
            placeholder_image: self.placeholder_image.clone(),
        }
    }
}

/// Renders listings with the default sentinel and placeholder
pub fn render(properties: &[PropertyRecord], workers_used: u32) -> RenderedOutput {
    ResultsRenderer::default().render(properties, workers_used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_counts_and_echo() {
        let properties = vec![PropertyRecord::default(); 4];
        let output = render(&properties, 9);

        assert_eq!(output.stats.count, 4);
        assert_eq!(output.cards.len(), 4);
        assert_eq!(output.stats.workers, 9);
    }

    #[test]
    fn test_custom_sentinel() {
        let properties = vec![
            PropertyRecord {
                price: "unknown".to_string(),
                ..PropertyRecord::default()
            },
            PropertyRecord {
                price: "$500k".to_string(),
                ..PropertyRecord::default()
            },
        ];

        let renderer = ResultsRenderer::new("unknown", "https://example.com/none.png");
        let output = renderer.render(&properties, 2);

        assert_eq!(output.stats.with_price, 1);
        assert_eq!(output.cards[0].image, "https://example.com/none.png");
    }

    #[test]
    fn test_render_is_pure() {
        let properties = vec![PropertyRecord {
            location: "Bekasi".to_string(),
            ..PropertyRecord::default()
        }];

        assert_eq!(render(&properties, 3), render(&properties, 3));
    }
}
