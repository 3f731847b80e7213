//! Derived view snapshots.
//!
//! A `DerivedView` is a pure function of the current selections and the
//! static catalog: everything the form needs to render after one change,
//! computed in one pass. It is never stored.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{
    base_price_of, compute_total, destinations_for, effective_passengers, fare_classes_for,
    format_price,
};
use super::catalog::Category;
use super::selection::BookingSelection;

/// One destination option as the form should render it.
#[derive(Debug, Clone, Serialize)]
pub struct DestinationOption {
    pub code: &'static str,
    pub label: &'static str,
    /// Set when the code equals the currently selected origin, so the form
    /// blocks picking the same city twice.
    pub disabled: bool,
}

/// One fare-class option as the form should render it.
#[derive(Debug, Clone, Serialize)]
pub struct FareClassOption {
    pub code: &'static str,
    pub label: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub multiplier: Decimal,
}

/// Read-only snapshot the UI renders into option lists, field toggles, and
/// the price display.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedView {
    pub category: Category,
    pub destinations: Vec<DestinationOption>,
    pub fare_classes: Vec<FareClassOption>,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    pub effective_passengers: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    /// Formatted for display, e.g. `₹1500.00`.
    pub total_display: String,
    /// The passenger-count field is shown and required for everything but
    /// hotels; the property-name field is the inverse.
    pub passengers_required: bool,
    pub hotel_name_required: bool,
}

impl DerivedView {
    /// Build the snapshot for the given selections.
    ///
    /// Option lists are repopulated before the total is computed, so the
    /// price always reads the lists the form is about to show.
    pub fn derive(selection: &BookingSelection) -> Self {
        let category = selection.category();
        let origin = selection.origin().unwrap_or("");

        let destinations = destinations_for(category)
            .iter()
            .map(|d| DestinationOption {
                code: d.code,
                label: d.label,
                disabled: !origin.is_empty() && d.code == origin,
            })
            .collect();

        let fare_classes = fare_classes_for(category)
            .iter()
            .map(|c| FareClassOption {
                code: c.code,
                label: c.label,
                multiplier: c.multiplier,
            })
            .collect();

        let fare_class = selection.fare_class().unwrap_or("");
        let total = compute_total(category, selection.passenger_count(), fare_class);

        DerivedView {
            category,
            destinations,
            fare_classes,
            base_price: base_price_of(category),
            effective_passengers: effective_passengers(category, selection.passenger_count()),
            total,
            total_display: format_price(total),
            passengers_required: !category.is_hotel(),
            hotel_name_required: category.is_hotel(),
        }
    }
}
