//! Property records, nested shop sub-records, and attachments

use serde::{Deserialize, Serialize};

/// A shop embedded inside a house-type property.
///
/// Shops inside houses are sub-records rather than independent
/// [`Property`] rows; the count aggregation folds them into the street's
/// `shops` bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    #[serde(default)]
    pub number: String,

    #[serde(rename = "type", default)]
    pub type_name: String,

    #[serde(default)]
    pub description: String,
}

/// An image attachment, stored inline as a base64 data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
    pub id: String,

    /// Base64 data URI of the image bytes
    pub file_data: String,

    /// Original file name
    pub file_name: String,

    /// Smaller data URI used for list views
    #[serde(default)]
    pub preview: String,
}

/// A document attachment, stored inline as a base64 data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAttachment {
    pub id: String,

    /// Display name
    pub name: String,

    /// Base64 data URI of the document bytes
    pub file_data: String,

    /// Original file name
    pub file_name: String,

    /// MIME type of the original file
    pub file_type: String,
}

/// A property registered on a street.
///
/// `street_id` is a surrogate-key reference to [`crate::Street::id`] — the
/// one proper foreign key in the data model. `type_name` is an open string
/// categorized through [`crate::PropertyCategory`]; arbitrary values are
/// accepted and fall into the "others" bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique id within the property collection
    pub id: i64,

    /// Id of the owning street
    pub street_id: i64,

    /// Unit identifier such as "15A"; free text, not globally unique
    pub number: String,

    /// Free-text category, e.g. "House", "Shop", "Hotel", "Office"
    #[serde(rename = "type")]
    pub type_name: String,

    pub owner: String,

    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub description: String,

    /// ISO calendar date (`YYYY-MM-DD`)
    #[serde(default)]
    pub registration_date: String,

    /// Whether a house-type property contains shops
    #[serde(default)]
    pub has_shops: bool,

    /// Number of shops inside the house; counted into the street's
    /// `shops` bucket when `has_shops` is set
    #[serde(default)]
    pub shop_count: u32,

    /// Detail records for the embedded shops
    #[serde(default)]
    pub shops: Vec<Shop>,

    /// For shops: the house number they belong to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageAttachment>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<DocumentAttachment>,
}

impl Property {
    /// Create a new property on the given street.
    pub fn new(
        id: i64,
        street_id: i64,
        number: impl Into<String>,
        type_name: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            id,
            street_id,
            number: number.into(),
            type_name: type_name.into(),
            owner: owner.into(),
            contact: String::new(),
            description: String::new(),
            registration_date: String::new(),
            has_shops: false,
            shop_count: 0,
            shops: Vec::new(),
            house_number: None,
            images: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Builder-style: set the contact string
    #[must_use]
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    /// Builder-style: set the registration date
    #[must_use]
    pub fn with_registration_date(mut self, date: impl Into<String>) -> Self {
        self.registration_date = date.into();
        self
    }

    /// Builder-style: mark the property as a house containing `count`
    /// shops, padding the detail records to match.
    #[must_use]
    pub fn with_shops(mut self, count: u32) -> Self {
        self.has_shops = count > 0;
        self.shop_count = count;
        self.shops.resize(count as usize, Shop::default());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_shape_uses_original_field_names() {
        let property = Property::new(100, 10, "15A", "House", "John Adebayo").with_shops(2);

        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["streetId"], 10);
        assert_eq!(json["type"], "House");
        assert_eq!(json["hasShops"], true);
        assert_eq!(json["shopCount"], 2);
        // empty attachment arrays are omitted, matching the source shape
        assert!(json.get("images").is_none());
    }

    #[test]
    fn optional_house_fields_default_when_absent() {
        let json = r#"{
            "id": 1,
            "streetId": 5,
            "number": "3B",
            "type": "Shop",
            "owner": "Amina Yusuf"
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert!(!property.has_shops);
        assert_eq!(property.shop_count, 0);
        assert!(property.shops.is_empty());
        assert!(property.images.is_empty());
    }
}
