//! Booking price/configuration engine for the TravelGo reservation form.
//!
//! Maps a selected travel category to its valid destinations, fare classes
//! and base price, keeps dependent selections consistent, and computes the
//! displayed total. The form layer calls in over HTTP/JSON and renders the
//! returned snapshots.

pub mod calculators;
pub mod catalog;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod selection;
pub mod view;

// Re-export commonly used items
pub use calculators::{compute_total, format_price, round_money};
pub use catalog::Category;
pub use routes::router;
pub use selection::{BookingSelection, FieldChange};
pub use view::DerivedView;

/// Booking engine error types.
///
/// Stale selections and unrecognized fare-class codes are self-healing and
/// never reported; an unknown category key indicates a caller bug and is the
/// one loud failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    #[error("unknown booking category: {0}")]
    UnknownCategory(String),
}
