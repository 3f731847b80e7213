//! Core price derivation functions.
//!
//! Pure functions over the static catalog - no state, no I/O. The selection
//! state machine and the HTTP layer both call through here.

use rust_decimal::{Decimal, RoundingStrategy};

use super::catalog::{Category, Destination, FareClass};

/// Currency symbol for formatted price strings.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use travelgo_booking::booking::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Destination list for a category, in catalog order.
///
/// The list is returned unmodified; disabling the option matching the current
/// origin is a presentation concern handled when building the derived view.
pub fn destinations_for(category: Category) -> &'static [Destination] {
    category.config().destinations
}

/// Fare-class list for a category, in catalog order.
pub fn fare_classes_for(category: Category) -> &'static [FareClass] {
    category.config().fare_classes
}

/// Base price for one unit (one passenger, or one night for hotels).
pub fn base_price_of(category: Category) -> Decimal {
    category.config().base_price
}

/// Multiplier for a fare-class code within a category.
///
/// An unrecognized or blank code yields the neutral multiplier `1` instead of
/// an error, so a stale selection never leaves the price display unrenderable.
pub fn multiplier_of(category: Category, fare_class_code: &str) -> Decimal {
    category
        .config()
        .fare_classes
        .iter()
        .find(|c| c.code == fare_class_code)
        .map(|c| c.multiplier)
        .unwrap_or(Decimal::ONE)
}

/// Passenger count used in pricing: hotels book one property regardless of
/// the entered count; other categories clamp at zero.
pub fn effective_passengers(category: Category, passenger_count: u32) -> u32 {
    if category.is_hotel() {
        1
    } else {
        passenger_count
    }
}

/// Total price for the current selections, rounded to two decimal places.
///
/// `base_price × effective_passengers × multiplier`. The unrounded value is
/// never exposed; no further arithmetic depends on it.
pub fn compute_total(category: Category, passenger_count: u32, fare_class_code: &str) -> Decimal {
    let passengers = effective_passengers(category, passenger_count);
    let total = base_price_of(category)
        * Decimal::from(passengers)
        * multiplier_of(category, fare_class_code);
    round_money(total, 2)
}

/// Format an amount as the display string the form renders, e.g. `₹1500.00`.
pub fn format_price(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{:.2}", round_money(amount, 2))
}

/// True only when both values are selected (non-empty) and equal; an
/// unselected value never triggers the origin/destination conflict.
pub fn is_same_origin_destination(origin: &str, destination: &str) -> bool {
    !origin.is_empty() && origin == destination
}
