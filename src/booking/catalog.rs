//! Static category catalog.
//!
//! One immutable configuration record per bookable travel product. Adding a
//! category means adding an enum variant and its table entry here; nothing
//! else in the crate changes.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::EngineError;

/// A bookable travel product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Train,
    Bus,
    Flight,
    Hotel,
}

/// A destination option within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub code: &'static str,
    pub label: &'static str,
}

/// A fare tier within a category, carrying its price multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareClass {
    pub code: &'static str,
    pub label: &'static str,
    pub multiplier: Decimal,
}

/// Configuration for one category: base price plus the dependent-field lists.
#[derive(Debug, Clone, Copy)]
pub struct CategoryConfig {
    pub base_price: Decimal,
    pub destinations: &'static [Destination],
    pub fare_classes: &'static [FareClass],
}

static TRAIN: CategoryConfig = CategoryConfig {
    base_price: dec!(500),
    destinations: &[
        Destination { code: "Delhi", label: "Delhi - From ₹499" },
        Destination { code: "Mumbai", label: "Mumbai - From ₹599" },
        Destination { code: "Bengaluru", label: "Bengaluru - From ₹549" },
        Destination { code: "Kolkata", label: "Kolkata - From ₹499" },
        Destination { code: "Chennai", label: "Chennai - From ₹549" },
        Destination { code: "Hyderabad", label: "Hyderabad - From ₹549" },
        Destination { code: "Jaipur", label: "Jaipur - From ₹449" },
        Destination { code: "Varanasi", label: "Varanasi - From ₹499" },
    ],
    fare_classes: &[
        FareClass { code: "economy", label: "Sleeper (1x)", multiplier: dec!(1) },
        FareClass { code: "business", label: "3A (1.5x)", multiplier: dec!(1.5) },
        FareClass { code: "first", label: "2A (2x)", multiplier: dec!(2) },
    ],
};

static BUS: CategoryConfig = CategoryConfig {
    base_price: dec!(300),
    destinations: &[
        Destination { code: "Delhi", label: "Delhi - From ₹299" },
        Destination { code: "Mumbai", label: "Mumbai - From ₹349" },
        Destination { code: "Bengaluru", label: "Bengaluru - From ₹329" },
        Destination { code: "Kolkata", label: "Kolkata - From ₹299" },
        Destination { code: "Chennai", label: "Chennai - From ₹329" },
        Destination { code: "Hyderabad", label: "Hyderabad - From ₹329" },
        Destination { code: "Jaipur", label: "Jaipur - From ₹279" },
        Destination { code: "Goa", label: "Goa - From ₹399" },
    ],
    fare_classes: &[
        FareClass { code: "non_ac_seater", label: "Non-AC Seater (1x)", multiplier: dec!(1) },
        FareClass { code: "ac_seater", label: "AC Seater (1.2x)", multiplier: dec!(1.2) },
        FareClass { code: "non_ac_sleeper", label: "Non-AC Sleeper (1.3x)", multiplier: dec!(1.3) },
        FareClass { code: "ac_sleeper", label: "AC Sleeper (1.5x)", multiplier: dec!(1.5) },
    ],
};

static FLIGHT: CategoryConfig = CategoryConfig {
    base_price: dec!(2000),
    destinations: &[
        Destination { code: "Delhi", label: "Delhi - From ₹1999" },
        Destination { code: "Mumbai", label: "Mumbai - From ₹2199" },
        Destination { code: "Bengaluru", label: "Bengaluru - From ₹2099" },
        Destination { code: "Kolkata", label: "Kolkata - From ₹1999" },
        Destination { code: "Chennai", label: "Chennai - From ₹2099" },
        Destination { code: "Hyderabad", label: "Hyderabad - From ₹2099" },
        Destination { code: "Goa", label: "Goa - From ₹2499" },
        Destination { code: "Kochi", label: "Kochi - From ₹2299" },
    ],
    fare_classes: &[
        FareClass { code: "economy", label: "Economy (1x)", multiplier: dec!(1) },
        FareClass { code: "business", label: "Business (1.5x)", multiplier: dec!(1.5) },
        FareClass { code: "first", label: "First (2x)", multiplier: dec!(2) },
    ],
};

static HOTEL: CategoryConfig = CategoryConfig {
    base_price: dec!(1500),
    destinations: &[
        Destination { code: "Delhi", label: "Delhi - From ₹1499/night" },
        Destination { code: "Mumbai", label: "Mumbai - From ₹1699/night" },
        Destination { code: "Bengaluru", label: "Bengaluru - From ₹1599/night" },
        Destination { code: "Kolkata", label: "Kolkata - From ₹1499/night" },
        Destination { code: "Chennai", label: "Chennai - From ₹1599/night" },
        Destination { code: "Hyderabad", label: "Hyderabad - From ₹1599/night" },
        Destination { code: "Jaipur", label: "Jaipur - From ₹1399/night" },
        Destination { code: "Goa", label: "Goa - From ₹1999/night" },
    ],
    fare_classes: &[
        FareClass { code: "economy", label: "Standard (1x)", multiplier: dec!(1) },
        FareClass { code: "business", label: "Deluxe (1.5x)", multiplier: dec!(1.5) },
        FareClass { code: "first", label: "Suite (2x)", multiplier: dec!(2) },
    ],
};

impl Category {
    /// All categories in display order; `Train` is the form default.
    pub const ALL: [Category; 4] = [
        Category::Train,
        Category::Bus,
        Category::Flight,
        Category::Hotel,
    ];

    /// Look up the immutable configuration for this category.
    pub fn config(self) -> &'static CategoryConfig {
        match self {
            Category::Train => &TRAIN,
            Category::Bus => &BUS,
            Category::Flight => &FLIGHT,
            Category::Hotel => &HOTEL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Train => "train",
            Category::Bus => "bus",
            Category::Flight => "flight",
            Category::Hotel => "hotel",
        }
    }

    /// Hotel bookings price per property/night, not per passenger, and take a
    /// property name instead of a passenger count.
    pub fn is_hotel(self) -> bool {
        self == Category::Hotel
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Train
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    /// The one place an unknown category key can surface. Callers passing
    /// anything but the four defined keys get a loud error, never a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Category::Train),
            "bus" => Ok(Category::Bus),
            "flight" => Ok(Category::Flight),
            "hotel" => Ok(Category::Hotel),
            other => Err(EngineError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_every_category_has_nonempty_lists() {
        for category in Category::ALL {
            let cfg = category.config();
            assert!(!cfg.destinations.is_empty(), "{category} has no destinations");
            assert!(!cfg.fare_classes.is_empty(), "{category} has no fare classes");
        }
    }

    #[test]
    fn test_destination_codes_unique_within_category() {
        for category in Category::ALL {
            let codes: HashSet<_> = category
                .config()
                .destinations
                .iter()
                .map(|d| d.code)
                .collect();
            assert_eq!(codes.len(), category.config().destinations.len());
        }
    }

    #[test]
    fn test_fare_class_codes_unique_within_category() {
        for category in Category::ALL {
            let codes: HashSet<_> = category
                .config()
                .fare_classes
                .iter()
                .map(|c| c.code)
                .collect();
            assert_eq!(codes.len(), category.config().fare_classes.len());
        }
    }

    #[test]
    fn test_base_prices_positive_and_multipliers_at_least_one() {
        for category in Category::ALL {
            let cfg = category.config();
            assert!(cfg.base_price > dec!(0));
            for class in cfg.fare_classes {
                assert!(class.multiplier >= dec!(1), "{}.{}", category, class.code);
            }
        }
    }

    #[test]
    fn test_base_prices_match_table() {
        assert_eq!(Category::Train.config().base_price, dec!(500));
        assert_eq!(Category::Bus.config().base_price, dec!(300));
        assert_eq!(Category::Flight.config().base_price, dec!(2000));
        assert_eq!(Category::Hotel.config().base_price, dec!(1500));
    }

    #[test]
    fn test_parse_known_categories() {
        assert_eq!("train".parse::<Category>().unwrap(), Category::Train);
        assert_eq!("bus".parse::<Category>().unwrap(), Category::Bus);
        assert_eq!("flight".parse::<Category>().unwrap(), Category::Flight);
        assert_eq!("hotel".parse::<Category>().unwrap(), Category::Hotel);
    }

    #[test]
    fn test_parse_unknown_category_is_an_error() {
        let err = "cruise".parse::<Category>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownCategory(ref k) if k == "cruise"));
    }

    #[test]
    fn test_default_category_is_train() {
        assert_eq!(Category::default(), Category::Train);
    }
}
