//! HTML serialization of rendered results
//!
//! Every value that came from the crawler is escaped here, both in text
//! content and in attribute values. Nothing upstream of this module produces
//! markup.

use crate::render::{DerivedStats, RenderError, RenderedCard, RenderedOutput};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use url::Url;

/// Escapes text for use in HTML content or a quoted attribute value
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Returns true for absolute `http`/`https` URLs, the only schemes a crawled
/// link or image may carry into the page
pub fn is_web_url(input: &str) -> bool {
    Url::parse(input)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Renders the four summary figures
pub fn render_stats_html(stats: &DerivedStats) -> String {
    let items = [
        (stats.count.to_string(), "Properties Found"),
        (stats.workers.to_string(), "Workers Used"),
        (stats.with_price.to_string(), "With Price Data"),
        (stats.unique_locations.to_string(), "Locations"),
    ];

    let mut html = String::new();
    for (number, label) in items {
        html.push_str("<div class=\"stat-item\">\n");
        html.push_str(&format!("    <div class=\"stat-number\">{}</div>\n", number));
        html.push_str(&format!("    <div class=\"stat-label\">{}</div>\n", label));
        html.push_str("</div>\n");
    }
    html
}

/// Renders one listing card
///
/// The image keeps its fallback in a data attribute so a photo that fails to
/// load at display time is swapped for the placeholder.
pub fn render_card_html(card: &RenderedCard, placeholder_image: &str) -> String {
    let mut html = String::new();

    let image = if is_web_url(&card.image) {
        card.image.as_str()
    } else {
        placeholder_image
    };

    html.push_str("<div class=\"property-card\">\n");
    html.push_str("  <div class=\"property-header\">\n");
    html.push_str(&format!(
        "    <img src=\"{}\" alt=\"{}\" class=\"property-image\" data-fallback=\"{}\" \
         onerror=\"this.onerror=null;this.src=this.dataset.fallback\">\n",
        escape_html(image),
        escape_html(&card.title),
        escape_html(placeholder_image)
    ));
    html.push_str(&format!(
        "    <div class=\"property-badge\">📸 {}</div>\n",
        escape_html(&card.badge)
    ));
    html.push_str("    <div class=\"property-info\">\n");
    html.push_str(&format!(
        "      <div class=\"property-title\">{}</div>\n",
        escape_html(&card.title)
    ));
    html.push_str(&format!(
        "      <div class=\"property-price\">{}</div>\n",
        escape_html(&card.price)
    ));
    html.push_str(&format!(
        "      <div class=\"property-location\">📍 {}</div>\n",
        escape_html(&card.location)
    ));
    html.push_str("    </div>\n");
    html.push_str("  </div>\n");

    html.push_str("  <div class=\"property-body\">\n");
    html.push_str("    <div class=\"property-specs\">\n");
    for (icon, value) in [
        ("🛏️", &card.bedrooms),
        ("🚿", &card.bathrooms),
        ("📏", &card.land_size),
        ("🏗️", &card.building_size),
    ] {
        html.push_str(&format!(
            "      <div class=\"spec-item\"><span class=\"spec-icon\">{}</span>\
             <span class=\"spec-text\">{}</span></div>\n",
            icon,
            escape_html(value)
        ));
    }
    html.push_str("    </div>\n");
    html.push_str(&format!(
        "    <div class=\"property-description\">{}</div>\n",
        escape_html(&card.description)
    ));
    html.push_str("    <div class=\"property-footer\">\n");
    html.push_str("      <div class=\"agent-info\">\n");
    html.push_str(&format!(
        "        <div class=\"agent-name\">👤 {}</div>\n",
        escape_html(&card.agent)
    ));
    html.push_str(&format!(
        "        <div class=\"scraped-at\">⏰ {}</div>\n",
        escape_html(&card.scraped_at)
    ));
    html.push_str("      </div>\n");
    if is_web_url(&card.url) {
        html.push_str(&format!(
            "      <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"view-link\">View Details</a>\n",
            escape_html(&card.url)
        ));
    } else {
        html.push_str("      <span class=\"view-link unavailable\">No Link</span>\n");
    }
    html.push_str("    </div>\n");
    html.push_str("  </div>\n");
    html.push_str("</div>\n");

    html
}

/// Renders the stats block and the card grid as an HTML fragment
pub fn render_fragment(output: &RenderedOutput) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"stats-grid\" id=\"statsContainer\">\n");
    html.push_str(&render_stats_html(&output.stats));
    html.push_str("</div>\n");

    html.push_str("<div class=\"properties-grid\" id=\"propertiesGrid\">\n");
    for card in &output.cards {
        html.push_str(&render_card_html(card, &output.placeholder_image));
    }
    html.push_str("</div>\n");

    html
}

/// Renders a standalone HTML page stamped with the current time
pub fn render_page(output: &RenderedOutput) -> String {
    render_page_at(output, Utc::now())
}

/// Renders a standalone HTML page stamped with `generated_at`
pub fn render_page_at(output: &RenderedOutput, generated_at: DateTime<Utc>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Property Crawl Results</title>\n");
    html.push_str(PAGE_STYLE);
    html.push_str("</head>\n<body>\n");
    html.push_str("<div class=\"container\">\n");
    html.push_str("<h1>🏠 Property Crawl Results</h1>\n");
    html.push_str(&format!(
        "<p class=\"generated\">Generated {}</p>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("<div class=\"results\" id=\"results\">\n");
    html.push_str("<h2>📊 Results Summary</h2>\n");
    html.push_str(&render_fragment(output));
    html.push_str("</div>\n</div>\n</body>\n</html>\n");

    html
}

/// Writes the HTML page for `output` to `path`
pub fn write_html_report(output: &RenderedOutput, path: &Path) -> Result<(), RenderError> {
    let page = render_page(output);

    let mut file = File::create(path)?;
    file.write_all(page.as_bytes())?;

    tracing::info!("Wrote HTML report to {}", path.display());
    Ok(())
}

const PAGE_STYLE: &str = "<style>
body { font-family: sans-serif; background: #f4f5f7; margin: 0; }
.container { max-width: 1200px; margin: 0 auto; padding: 24px; }
.stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; }
.stat-item { background: #fff; border-radius: 8px; padding: 16px; text-align: center; }
.stat-number { font-size: 2em; font-weight: bold; }
.properties-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 16px; margin-top: 24px; }
.property-card { background: #fff; border-radius: 8px; overflow: hidden; }
.property-header { position: relative; }
.property-image { width: 100%; height: 220px; object-fit: cover; }
.property-badge { position: absolute; top: 8px; right: 8px; background: rgba(0,0,0,.6); color: #fff; padding: 2px 8px; border-radius: 12px; }
.property-info, .property-body { padding: 12px 16px; }
.property-price { font-weight: bold; color: #2e7d32; }
.property-specs { display: grid; grid-template-columns: repeat(2, 1fr); gap: 4px; }
.property-footer { display: flex; justify-content: space-between; align-items: center; margin-top: 12px; }
</style>
";
