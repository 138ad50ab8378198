//! Canonical property-type classification
//!
//! The property `type` field is an open string. Counting and filtering
//! both need to bucket those strings into house/shop/hotel/other, and the
//! source of truth for that mapping lives here — one table, consulted by
//! every call site, so the lists cannot drift apart.

use serde::{Deserialize, Serialize};

/// Type names counted into the `houses` bucket. Matching is
/// case-sensitive; anything unlisted falls through to [`PropertyCategory::Other`].
const HOUSE_TYPES: &[&str] = &[
    "House",
    "Single-Family Home",
    "Multi-Family Home",
    "Townhouse",
    "Cottage",
    "Villa",
    "Mansion",
];

/// Type names counted into the `shops` bucket.
const SHOP_TYPES: &[&str] = &[
    "Shop",
    "Restaurant / Café",
    "Shopping Mall / Plaza",
    "Gas Station",
];

/// Type names counted into the `hotels` bucket.
const HOTEL_TYPES: &[&str] = &["Hotel"];

/// The full set of selectable property-type labels offered by filter and
/// registration surfaces. Classification does not require membership
/// here; unlisted strings are accepted and categorized as `Other`.
pub const PROPERTY_TYPE_LABELS: &[&str] = &[
    "House",
    "Shop",
    "Office",
    "Hotel",
    "Apartment",
    "Warehouse",
    "Commercial Building",
    "Residential Building",
    "Single-Family Home",
    "Multi-Family Home",
    "Condominium (Condo)",
    "Townhouse",
    "Mansion",
    "Villa",
    "Mobile Home",
    "Cottage",
    "Restaurant / Café",
    "Shopping Mall / Plaza",
    "Medical Office",
    "Clinic",
    "Factory",
    "Manufacturing Plant",
    "Distribution Center",
    "Flex Space",
    "School",
    "University",
    "Hospital",
    "Nursing Home",
    "Church",
    "Mosque",
    "Place of Worship",
    "Government Building",
    "Theater",
    "Cinema",
    "Gym / Fitness Center",
    "Salon",
    "Barbershop",
    "Gas Station",
    "Other",
];

/// Derived classification of a property's free-text type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyCategory {
    /// House-like: counted into `houses`, may embed shops
    House,
    /// Shop-like: counted into `shops`
    Shop,
    /// Hotel-like: counted into `hotels`
    Hotel,
    /// Everything else, including custom types
    Other,
}

impl PropertyCategory {
    /// Classify a free-text type name. Case-sensitive, exact membership.
    pub fn classify(type_name: &str) -> Self {
        if HOUSE_TYPES.contains(&type_name) {
            Self::House
        } else if SHOP_TYPES.contains(&type_name) {
            Self::Shop
        } else if HOTEL_TYPES.contains(&type_name) {
            Self::Hotel
        } else {
            Self::Other
        }
    }

    /// Display label for the bucket.
    pub fn label(&self) -> &'static str {
        match self {
            Self::House => "Houses",
            Self::Shop => "Shops",
            Self::Hotel => "Hotels",
            Self::Other => "Others",
        }
    }
}

/// Whether a search term names a known property-type label,
/// case-insensitively. Used to switch directory search into property
/// mode.
pub fn is_known_type_label(term: &str) -> bool {
    let term = term.trim();
    !term.is_empty() && PROPERTY_TYPE_LABELS.iter().any(|l| l.eq_ignore_ascii_case(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("House", PropertyCategory::House)]
    #[test_case("Single-Family Home", PropertyCategory::House)]
    #[test_case("Townhouse", PropertyCategory::House)]
    #[test_case("Cottage", PropertyCategory::House)]
    #[test_case("Shop", PropertyCategory::Shop)]
    #[test_case("Restaurant / Café", PropertyCategory::Shop)]
    #[test_case("Shopping Mall / Plaza", PropertyCategory::Shop)]
    #[test_case("Gas Station", PropertyCategory::Shop)]
    #[test_case("Hotel", PropertyCategory::Hotel)]
    #[test_case("Office", PropertyCategory::Other)]
    #[test_case("Warehouse", PropertyCategory::Other)]
    #[test_case("Boat House", PropertyCategory::Other)]
    fn classification(type_name: &str, expected: PropertyCategory) {
        assert_eq!(PropertyCategory::classify(type_name), expected);
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert_eq!(PropertyCategory::classify("house"), PropertyCategory::Other);
        assert_eq!(PropertyCategory::classify("HOTEL"), PropertyCategory::Other);
    }

    #[test]
    fn known_labels_match_case_insensitively() {
        assert!(is_known_type_label("hotel"));
        assert!(is_known_type_label(" Warehouse "));
        assert!(!is_known_type_label("hot"));
        assert!(!is_known_type_label(""));
    }
}
