//! # Wardbook Core
//!
//! Entity schemas, storage abstractions, and the pure query layer for the
//! Wardbook registry: Community Development Associations (CDAs), the
//! streets grouped under them, and the properties on those streets.
//!
//! ## Key Components
//!
//! - **Types**: [`Cda`], [`Street`], [`Property`] and their sub-records,
//!   serialized with the camelCase field names of the persisted JSON
//! - **Category table**: [`PropertyCategory`] — the single canonical
//!   classification of free-text property types used by counting and
//!   filtering alike
//! - **Registry trait**: the seam between this crate and a storage
//!   backend; reads are fail-soft, mutations cascade
//! - **Counts**: derivation of a street's property-count aggregate,
//!   including shops nested inside house properties
//! - **Query**: side-effect-free grouping, filtering, and pagination over
//!   full in-memory snapshots
//!
//! ## Architecture
//!
//! Business logic depends on the [`Registry`] trait rather than a concrete
//! store. The `wardbook-store` crate provides the JSON key-value backed
//! implementation; tests can substitute an in-memory one.

#![warn(clippy::all)]

pub mod counts;
pub mod query;
pub mod storage;
pub mod types;

pub use counts::tally_properties;
pub use query::{
    filter_directory, group_streets, paginate, registry_totals, ward_stats, CdaEntry, DateRange,
    DirectoryFilters, DirectorySummary, DirectoryView, NumericRange, Page, PropertyModeSummary,
    RegistryTotals, WardStats, DASHBOARD_PAGE_SIZE, DIRECTORY_PAGE_SIZE,
};
pub use storage::{Registry, StoreError, StoreResult};
pub use types::{
    is_known_type_label, Cda, Chairman, DocumentAttachment, ImageAttachment, Property,
    PropertyCategory, PropertyCount, Shop, Street, TypeTag, PROPERTY_TYPE_LABELS,
};
