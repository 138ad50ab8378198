//! Property-count aggregation
//!
//! Derives a street's `{houses, shops, hotels, others}` aggregate from its
//! live property collection. Shops embedded inside house-type properties
//! count as additional shop units, not as houses.

use crate::types::{Property, PropertyCategory, PropertyCount};

/// Tally a street's properties into the four category buckets.
///
/// Pure and idempotent: tallying the same slice twice yields the same
/// aggregate. Persisting the result is the storage backend's job.
pub fn tally_properties(properties: &[Property]) -> PropertyCount {
    let mut count = PropertyCount::default();

    for property in properties {
        match PropertyCategory::classify(&property.type_name) {
            PropertyCategory::House => {
                count.houses += 1;
                if property.has_shops {
                    count.shops += property.shop_count;
                }
            }
            PropertyCategory::Shop => count.shops += 1,
            PropertyCategory::Hotel => count.hotels += 1,
            PropertyCategory::Other => count.others += 1,
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Property;

    fn property(id: i64, type_name: &str) -> Property {
        Property::new(id, 1, format!("{id}A"), type_name, "Owner")
    }

    #[test]
    fn buckets_by_category_and_folds_in_nested_shops() {
        let properties = vec![
            property(1, "House").with_shops(2),
            property(2, "Shop"),
            property(3, "Hotel"),
            property(4, "Warehouse"),
        ];

        let count = tally_properties(&properties);
        assert_eq!(
            count,
            PropertyCount {
                houses: 1,
                shops: 3,
                hotels: 1,
                others: 1,
            }
        );
    }

    #[test]
    fn house_without_shops_contributes_no_shop_units() {
        let mut house = property(1, "House");
        // stale shop_count left behind after has_shops was unset
        house.shop_count = 4;
        house.has_shops = false;

        let count = tally_properties(&[house]);
        assert_eq!(count.houses, 1);
        assert_eq!(count.shops, 0);
    }

    #[test]
    fn tallying_is_idempotent() {
        let properties = vec![
            property(1, "House").with_shops(1),
            property(2, "Single-Family Home"),
            property(3, "Office"),
        ];

        let first = tally_properties(&properties);
        let second = tally_properties(&properties);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_street_tallies_to_zero() {
        assert_eq!(tally_properties(&[]), PropertyCount::default());
    }
}
