//! Plain-text report for terminal output

use crate::render::{RenderedCard, RenderedOutput};

/// Formats rendered results as a terminal report
pub fn format_text_report(output: &RenderedOutput) -> String {
    let mut text = String::new();

    text.push_str("=== Results Summary ===\n\n");
    text.push_str(&format!("  Properties Found: {}\n", output.stats.count));
    text.push_str(&format!("  Workers Used:     {}\n", output.stats.workers));
    text.push_str(&format!("  With Price Data:  {}\n", output.stats.with_price));
    text.push_str(&format!(
        "  Locations:        {}\n\n",
        output.stats.unique_locations
    ));

    for (index, card) in output.cards.iter().enumerate() {
        text.push_str(&format_card(index + 1, card));
        text.push('\n');
    }

    text
}

/// Drops control characters other than newline so crawled text cannot
/// carry terminal escape sequences
fn terminal_safe(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c == '\n' || !c.is_control())
        .collect()
}

fn format_card(position: usize, card: &RenderedCard) -> String {
    let mut text = String::new();

    text.push_str(&format!("[{}] {}\n", position, terminal_safe(&card.title)));
    text.push_str(&format!("    Price:    {}\n", terminal_safe(&card.price)));
    text.push_str(&format!("    Location: {}\n", terminal_safe(&card.location)));
    text.push_str(&format!(
        "    Specs:    {} bed | {} bath | land {} | building {}\n",
        terminal_safe(&card.bedrooms),
        terminal_safe(&card.bathrooms),
        terminal_safe(&card.land_size),
        terminal_safe(&card.building_size)
    ));
    if card.image_is_fallback {
        text.push_str(&format!("    Photos:   {} (no image)\n", card.badge));
    } else {
        text.push_str(&format!(
            "    Photos:   {} ({})\n",
            card.badge,
            terminal_safe(&card.image)
        ));
    }
    text.push_str(&format!("    Agent:    {}\n", terminal_safe(&card.agent)));
    text.push_str(&format!("    Scraped:  {}\n", terminal_safe(&card.scraped_at)));
    text.push_str(&format!("    Link:     {}\n", terminal_safe(&card.url)));
    if !card.description.is_empty() {
        text.push_str(&format!("    {}\n", terminal_safe(&card.description)));
    }

    text
}
