//! Job response wire format
//!
//! The backend answers every job with a JSON object of the shape
//! `{ success, properties?, error?, total? }`. This module turns that object
//! into a [`JobResponse`], rejecting any shape other than the two valid ones.

use crate::job::TransportError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One crawled listing
///
/// Every text field is carried as the backend produced it. Missing or null
/// fields degrade to empty strings, numbers and booleans are kept as their
/// text form, and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,

    /// Price text, or the unknown-price sentinel
    #[serde(deserialize_with = "lenient_string")]
    pub price: String,

    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub bedrooms: String,
    #[serde(deserialize_with = "lenient_string")]
    pub bathrooms: String,
    #[serde(deserialize_with = "lenient_string")]
    pub land_size: String,
    #[serde(deserialize_with = "lenient_string")]
    pub building_size: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub agent: String,

    /// Scrape timestamp, displayed as provided
    #[serde(deserialize_with = "lenient_string")]
    pub scraped_at: String,

    /// Link to the original listing
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,

    /// Photo URLs in listing order; may be empty
    #[serde(deserialize_with = "lenient_images")]
    pub images: Vec<String>,
}

/// Text form of a scalar record field; null becomes empty
fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_text)
}

/// Photo list; null becomes empty, a lone string becomes a single photo,
/// and null entries are skipped
fn lenient_images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let images = match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(value_to_text)
            .collect(),
        other => vec![value_to_text(other)],
    };
    Ok(images)
}

/// Outcome of one job as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobResponse {
    /// The crawl ran; listings are in backend order
    Success { properties: Vec<PropertyRecord> },

    /// The backend reported a failure
    Failure { error: String },
}

/// Raw response body before shape checking
#[derive(Debug, Deserialize)]
struct WireResponse {
    success: bool,
    properties: Option<Vec<PropertyRecord>>,
    error: Option<String>,
    total: Option<u64>,
}

/// Parses a response body into a job outcome
///
/// # Returns
///
/// * `Ok(JobResponse)` - The body is one of the two valid shapes
/// * `Err(TransportError::Body)` - The body is not a JSON job response
/// * `Err(TransportError::Protocol)` - The body is JSON but violates the
///   `properties`/`error` pairing rules
pub fn parse_response(body: &str) -> Result<JobResponse, TransportError> {
    let wire: WireResponse =
        serde_json::from_str(body).map_err(|e| TransportError::Body(e.to_string()))?;

    match (wire.success, wire.properties, wire.error) {
        (true, Some(properties), None) => {
            if let Some(total) = wire.total {
                if total != properties.len() as u64 {
                    tracing::warn!(
                        "Backend reported total {} but sent {} properties",
                        total,
                        properties.len()
                    );
                }
            }
            tracing::debug!("Parsed successful response with {} properties", properties.len());
            Ok(JobResponse::Success { properties })
        }
        (false, None, Some(error)) => {
            tracing::debug!("Parsed failure response: {}", error);
            Ok(JobResponse::Failure { error })
        }
        (true, None, _) => Err(TransportError::Protocol(
            "success response without properties".to_string(),
        )),
        (true, Some(_), Some(_)) => Err(TransportError::Protocol(
            "success response carries an error".to_string(),
        )),
        (false, _, None) => Err(TransportError::Protocol(
            "failure response without error message".to_string(),
        )),
        (false, Some(_), Some(_)) => Err(TransportError::Protocol(
            "failure response carries properties".to_string(),
        )),
    }
}
