//! Summary statistics over one job's listings

use crate::job::PropertyRecord;
use std::collections::HashSet;

/// Aggregate figures shown above the listing cards
///
/// Computed on every render from the listings and the worker count of the
/// request that produced them. Nothing here is carried between jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    /// Number of listings returned
    pub count: usize,

    /// Worker count of the completed job's request
    pub workers: u32,

    /// Listings whose price is not the unknown-price sentinel
    pub with_price: usize,

    /// Distinct location strings, compared exactly
    pub unique_locations: usize,
}

impl DerivedStats {
    /// Computes statistics for a result set
    ///
    /// # Arguments
    ///
    /// * `properties` - The listings of one completed job
    /// * `workers` - The worker count that job was submitted with
    /// * `unknown_price` - The sentinel meaning "no price available"
    pub fn compute(properties: &[PropertyRecord], workers: u32, unknown_price: &str) -> Self {
        Self {
            count: properties.len(),
            workers,
            with_price: count_with_price(properties, unknown_price),
            unique_locations: count_unique_locations(properties),
        }
    }
}

/// Counts listings with a known price
pub fn count_with_price(properties: &[PropertyRecord], unknown_price: &str) -> usize {
    properties
        .iter()
        .filter(|p| p.price != unknown_price)
        .count()
}

/// Counts distinct locations without any normalization
pub fn count_unique_locations(properties: &[PropertyRecord]) -> usize {
    properties
        .iter()
        .map(|p| p.location.as_str())
        .collect::<HashSet<_>>()
        .len()
}
