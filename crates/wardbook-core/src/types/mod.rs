//! Core domain types for the Wardbook registry
//!
//! Pure data structures, kept free of storage and query logic. Serde
//! attributes preserve the camelCase field names of the persisted JSON so
//! an existing store round-trips byte-compatibly.

mod category;
mod cda;
mod property;
mod street;

pub use category::{is_known_type_label, PropertyCategory, PROPERTY_TYPE_LABELS};
pub use cda::{Cda, Chairman};
pub use property::{DocumentAttachment, ImageAttachment, Property, Shop};
pub use street::{PropertyCount, Street, TypeTag};
