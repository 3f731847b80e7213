//! TravelGo booking engine library.
//!
//! The [`booking`] module holds the category catalog, the pure price
//! derivation functions, the selection state machine, and the HTTP boundary
//! the reservation form talks to.

pub mod booking;
pub mod error;

pub use error::{AppError, Result};
