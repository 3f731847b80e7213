//! Request DTOs for the booking API endpoints.

use serde::Deserialize;

/// The form's full current selections, posted on every relevant change.
///
/// Empty strings mean "unselected"; the category string is validated by the
/// engine, not by serde, so an unknown key produces a proper error response.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub passengers: u32,
    #[serde(default)]
    pub fare_class: String,
}

fn default_category() -> String {
    "train".to_string()
}
