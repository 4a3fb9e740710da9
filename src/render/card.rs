//! Per-listing view model

use crate::job::PropertyRecord;

/// Display-ready form of one listing
///
/// Fields hold raw, unescaped text; escaping belongs to whichever serializer
/// places the card on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    /// First listing photo, or the placeholder when there is none
    pub image: String,

    /// True when `image` is the placeholder
    pub image_is_fallback: bool,

    /// Number of photos the listing carries
    pub photo_count: usize,

    /// Photo count label, e.g. "3 Photos"
    pub badge: String,

    pub title: String,
    pub price: String,
    pub location: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub land_size: String,
    pub building_size: String,
    pub description: String,
    pub agent: String,
    pub scraped_at: String,
    pub url: String,
}

/// Builds the card for one listing
///
/// Never panics on an empty photo list: the placeholder takes the first
/// photo's place.
pub fn render_card(record: &PropertyRecord, placeholder_image: &str) -> RenderedCard {
    let (image, image_is_fallback) = match record.images.first() {
        Some(first) => (first.clone(), false),
        None => (placeholder_image.to_string(), true),
    };

    RenderedCard {
        image,
        image_is_fallback,
        photo_count: record.images.len(),
        badge: photo_badge(record.images.len()),
        title: record.title.clone(),
        price: record.price.clone(),
        location: record.location.clone(),
        bedrooms: record.bedrooms.clone(),
        bathrooms: record.bathrooms.clone(),
        land_size: record.land_size.clone(),
        building_size: record.building_size.clone(),
        description: record.description.clone(),
        agent: record.agent.clone(),
        scraped_at: record.scraped_at.clone(),
        url: record.url.clone(),
    }
}

/// Photo count label; only counts above one are plural
pub fn photo_badge(count: usize) -> String {
    if count > 1 {
        format!("{} Photos", count)
    } else {
        format!("{} Photo", count)
    }
}
