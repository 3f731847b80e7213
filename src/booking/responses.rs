//! Response DTOs for the booking API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::catalog::Category;

/// One destination entry as served to the form.
#[derive(Debug, Serialize)]
pub struct DestinationResponse {
    pub code: &'static str,
    pub label: &'static str,
}

/// One fare-class entry as served to the form.
#[derive(Debug, Serialize)]
pub struct FareClassResponse {
    pub code: &'static str,
    pub label: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub multiplier: Decimal,
}

/// Full configuration for one category.
#[derive(Debug, Serialize)]
pub struct CategoryConfigResponse {
    pub category: Category,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    pub destinations: Vec<DestinationResponse>,
    pub fare_classes: Vec<FareClassResponse>,
}

impl CategoryConfigResponse {
    pub fn for_category(category: Category) -> Self {
        let config = category.config();
        CategoryConfigResponse {
            category,
            base_price: config.base_price,
            destinations: config
                .destinations
                .iter()
                .map(|d| DestinationResponse { code: d.code, label: d.label })
                .collect(),
            fare_classes: config
                .fare_classes
                .iter()
                .map(|c| FareClassResponse {
                    code: c.code,
                    label: c.label,
                    multiplier: c.multiplier,
                })
                .collect(),
        }
    }
}

/// The whole catalog, in display order.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub categories: Vec<CategoryConfigResponse>,
}

/// Generic error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}
