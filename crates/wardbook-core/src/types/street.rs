//! Street records and their property-count aggregate

use serde::{Deserialize, Serialize};

/// Per-street property counts, bucketed by category.
///
/// When a stored street predates the aggregate, serde defaults all four
/// fields to zero rather than failing the read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyCount {
    #[serde(default)]
    pub houses: u32,
    #[serde(default)]
    pub shops: u32,
    #[serde(default)]
    pub hotels: u32,
    #[serde(default)]
    pub others: u32,
}

impl PropertyCount {
    /// Total properties across all four buckets.
    pub fn total(&self) -> u32 {
        self.houses + self.shops + self.hotels + self.others
    }
}

/// Legacy `{type}` tuple kept on streets as an alternate representation
/// of the property mix. Not always populated; the aggregate in
/// [`PropertyCount`] is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTag {
    #[serde(rename = "type")]
    pub type_name: String,
}

/// A street registered under a CDA.
///
/// Ownership is navigational: a street belongs to the CDA whose `name`
/// equals this street's `cda` field (and whose ward matches). There is no
/// surrogate foreign key in the stored shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Street {
    /// Unique id within the street collection
    pub id: i64,

    pub name: String,

    /// Name of the owning CDA
    pub cda: String,

    pub ward: String,

    /// Local-government-area label
    pub lg: String,

    /// Local-council-development-area label
    #[serde(default)]
    pub lcda: String,

    /// ISO calendar date (`YYYY-MM-DD`); repaired to today at read time
    /// when missing or unparseable
    #[serde(default)]
    pub registration_date: String,

    #[serde(default)]
    pub description: String,

    /// Optional street photo as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_contact: Option<String>,

    /// Derived aggregate, recomputed whenever the street's property
    /// collection changes
    #[serde(default)]
    pub property_count: PropertyCount,

    /// Legacy per-property type tags
    #[serde(default)]
    pub properties: Vec<TypeTag>,
}

impl Street {
    /// Create a new street under the given CDA.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        cda: impl Into<String>,
        ward: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cda: cda.into(),
            ward: ward.into(),
            lg: String::new(),
            lcda: String::new(),
            registration_date: String::new(),
            description: String::new(),
            image: None,
            owner_name: None,
            owner_contact: None,
            property_count: PropertyCount::default(),
            properties: Vec::new(),
        }
    }

    /// Builder-style: set the LGA and LCDA labels
    #[must_use]
    pub fn with_area(mut self, lg: impl Into<String>, lcda: impl Into<String>) -> Self {
        self.lg = lg.into();
        self.lcda = lcda.into();
        self
    }

    /// Builder-style: set the registration date
    #[must_use]
    pub fn with_registration_date(mut self, date: impl Into<String>) -> Self {
        self.registration_date = date.into();
        self
    }

    /// Builder-style: set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder-style: set the owner name and contact
    #[must_use]
    pub fn with_owner(mut self, name: impl Into<String>, contact: impl Into<String>) -> Self {
        self.owner_name = Some(name.into());
        self.owner_contact = Some(contact.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_property_count_defaults_to_zeroes() {
        let json = r#"{
            "id": 10,
            "name": "Ahmadu Bello Avenue",
            "cda": "Phase 1 CDA",
            "ward": "Ward C1",
            "lg": "Lagos Island LGA",
            "lcda": "Victoria Island LCDA",
            "registrationDate": "2023-03-15",
            "description": ""
        }"#;

        let street: Street = serde_json::from_str(json).unwrap();
        assert_eq!(street.property_count, PropertyCount::default());
        assert_eq!(street.property_count.total(), 0);
        assert!(street.properties.is_empty());
    }

    #[test]
    fn legacy_type_tags_round_trip_under_the_type_key() {
        let mut street = Street::new(1, "Palm Street", "Palm Grove CDA", "Ward C3");
        street.properties = vec![TypeTag {
            type_name: "house".into(),
        }];

        let json = serde_json::to_value(&street).unwrap();
        assert_eq!(json["properties"][0]["type"], "house");
    }

    #[test]
    fn property_count_totals() {
        let count = PropertyCount {
            houses: 2,
            shops: 1,
            hotels: 1,
            others: 0,
        };
        assert_eq!(count.total(), 4);
    }
}
