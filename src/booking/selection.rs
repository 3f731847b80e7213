//! Selection state and cross-field constraint enforcement.
//!
//! One `BookingSelection` lives per open form and is mutated synchronously by
//! field-change events; each event yields a fresh [`DerivedView`] so the form
//! is always consistent with the state that produced it.

use tracing::debug;

use super::catalog::Category;
use super::view::DerivedView;
use super::EngineError;

/// Current selections for one form session. Created empty when the form is
/// shown, discarded on submit or abandon.
#[derive(Debug, Clone, Default)]
pub struct BookingSelection {
    category: Category,
    origin: Option<String>,
    destination: Option<String>,
    passenger_count: u32,
    fare_class: Option<String>,
}

/// A field-change event from the form. Empty string values mean the field
/// was cleared back to "unselected".
#[derive(Debug, Clone)]
pub enum FieldChange {
    Category(String),
    Origin(String),
    Destination(String),
    Passengers(u32),
    FareClass(String),
}

impl BookingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn passenger_count(&self) -> u32 {
        self.passenger_count
    }

    pub fn fare_class(&self) -> Option<&str> {
        self.fare_class.as_deref()
    }

    /// Apply one field change and return the snapshot the form should render.
    ///
    /// A category change re-derives the dependent lists and silently clears
    /// any destination or fare-class code absent from the new category before
    /// the total is recomputed. Origin and destination changes only update
    /// which options the view disables: an already selected destination equal
    /// to a newly chosen origin is kept, matching the form's long-standing
    /// behavior of blocking future picks without clearing the current one.
    pub fn apply(&mut self, change: FieldChange) -> Result<DerivedView, EngineError> {
        match change {
            FieldChange::Category(key) => {
                self.category = key.parse::<Category>()?;
                self.clear_stale_codes();
            }
            FieldChange::Origin(value) => self.origin = selected(value),
            FieldChange::Destination(value) => self.destination = selected(value),
            FieldChange::Passengers(count) => self.passenger_count = count,
            FieldChange::FareClass(value) => self.fare_class = selected(value),
        }
        Ok(self.view())
    }

    /// Snapshot for the current selections without applying a change.
    pub fn view(&self) -> DerivedView {
        DerivedView::derive(self)
    }

    /// Reset destination/fare-class codes that the current category does not
    /// offer. A self-healing reset, not an error.
    fn clear_stale_codes(&mut self) {
        let config = self.category.config();

        let destination_stale = self
            .destination
            .as_deref()
            .is_some_and(|code| !config.destinations.iter().any(|d| d.code == code));
        if destination_stale {
            debug!(
                category = %self.category,
                code = self.destination.as_deref().unwrap_or(""),
                "clearing stale destination"
            );
            self.destination = None;
        }

        let fare_class_stale = self
            .fare_class
            .as_deref()
            .is_some_and(|code| !config.fare_classes.iter().any(|c| c.code == code));
        if fare_class_stale {
            debug!(
                category = %self.category,
                code = self.fare_class.as_deref().unwrap_or(""),
                "clearing stale fare class"
            );
            self.fare_class = None;
        }
    }
}

fn selected(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(selection: &mut BookingSelection, c: FieldChange) -> DerivedView {
        selection.apply(c).unwrap()
    }

    #[test]
    fn test_new_selection_defaults_to_train() {
        let selection = BookingSelection::new();
        assert_eq!(selection.category(), Category::Train);
        assert_eq!(selection.passenger_count(), 0);
        assert!(selection.origin().is_none());
        assert!(selection.destination().is_none());
        assert!(selection.fare_class().is_none());
    }

    #[test]
    fn test_unknown_category_change_is_rejected() {
        let mut selection = BookingSelection::new();
        let err = selection
            .apply(FieldChange::Category("cruise".to_string()))
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownCategory(_)));
        // The failed event must not have moved the state
        assert_eq!(selection.category(), Category::Train);
    }

    #[test]
    fn test_category_switch_clears_fare_class_missing_from_new_lists() {
        let mut selection = BookingSelection::new();
        change(&mut selection, FieldChange::FareClass("first".to_string()));
        assert_eq!(selection.fare_class(), Some("first"));

        // "first" exists for trains but not buses
        change(&mut selection, FieldChange::Category("bus".to_string()));
        assert!(selection.fare_class().is_none());
    }

    #[test]
    fn test_category_switch_keeps_fare_class_present_in_new_lists() {
        let mut selection = BookingSelection::new();
        change(&mut selection, FieldChange::FareClass("business".to_string()));
        change(&mut selection, FieldChange::Category("flight".to_string()));
        assert_eq!(selection.fare_class(), Some("business"));
    }

    #[test]
    fn test_category_switch_clears_destination_missing_from_new_lists() {
        let mut selection = BookingSelection::new();
        change(&mut selection, FieldChange::Destination("Varanasi".to_string()));

        // Varanasi is train-only
        change(&mut selection, FieldChange::Category("flight".to_string()));
        assert!(selection.destination().is_none());
    }

    #[test]
    fn test_category_switch_keeps_destination_present_in_new_lists() {
        let mut selection = BookingSelection::new();
        change(&mut selection, FieldChange::Destination("Mumbai".to_string()));
        change(&mut selection, FieldChange::Category("hotel".to_string()));
        assert_eq!(selection.destination(), Some("Mumbai"));
    }

    #[test]
    fn test_origin_change_does_not_clear_equal_destination() {
        // Blocking is forward-looking only: the existing pick survives, the
        // option is merely disabled for future picks.
        let mut selection = BookingSelection::new();
        change(&mut selection, FieldChange::Destination("Delhi".to_string()));
        let view = change(&mut selection, FieldChange::Origin("Delhi".to_string()));

        assert_eq!(selection.destination(), Some("Delhi"));
        let delhi = view.destinations.iter().find(|d| d.code == "Delhi").unwrap();
        assert!(delhi.disabled);
    }

    #[test]
    fn test_clearing_a_field_resets_it_to_unselected() {
        let mut selection = BookingSelection::new();
        change(&mut selection, FieldChange::Origin("Jaipur".to_string()));
        change(&mut selection, FieldChange::Origin(String::new()));
        assert!(selection.origin().is_none());
    }

    #[test]
    fn test_passenger_and_fare_class_changes_recompute_total() {
        let mut selection = BookingSelection::new();
        let view = change(&mut selection, FieldChange::Passengers(2));
        assert_eq!(view.total_display, "₹1000.00"); // 500 * 2, no class yet

        let view = change(&mut selection, FieldChange::FareClass("business".to_string()));
        assert_eq!(view.total_display, "₹1500.00"); // 500 * 2 * 1.5
    }

    #[test]
    fn test_full_category_switch_scenario() {
        let mut selection = BookingSelection::new();
        change(&mut selection, FieldChange::Passengers(2));
        change(&mut selection, FieldChange::FareClass("first".to_string()));
        let view = change(&mut selection, FieldChange::Category("bus".to_string()));

        // Fare class reset, so the bus total is base * passengers
        assert!(selection.fare_class().is_none());
        assert_eq!(view.total_display, "₹600.00");
        assert_eq!(view.fare_classes.len(), 4);
    }
}
