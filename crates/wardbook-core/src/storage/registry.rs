//! The `Registry` storage trait

use crate::storage::StoreResult;
use crate::types::{Cda, Property, Street};

/// Durable storage of the three registry collections.
///
/// # Read semantics
///
/// Reads are fail-soft: a missing key, unreadable medium, or corrupt
/// stored text yields an empty collection after logging a diagnostic.
/// Callers never see a read error and must not assume an empty result
/// distinguishes "no data" from "data unreadable".
///
/// # Write semantics
///
/// Every mutation is a full read-modify-write of the affected
/// collection(s) within one synchronous call. Failures are returned so a
/// view layer can surface "your change was lost"; no retry, no rollback.
///
/// # Cascades
///
/// Deleting a CDA removes its streets (matched by owning-CDA name) and
/// their properties; deleting a street removes its properties. Deleting a
/// property recomputes the owning street's aggregate. A missing id is a
/// no-op, not an error.
pub trait Registry: Send + Sync {
    /// All CDAs.
    fn cdas(&self) -> Vec<Cda>;

    /// All streets, with invalid registration dates repaired in the
    /// returned snapshot (the stored text is left untouched).
    fn streets(&self) -> Vec<Street>;

    /// All properties.
    fn properties(&self) -> Vec<Property>;

    /// Properties whose `street_id` matches the given street.
    fn properties_on_street(&self, street_id: i64) -> Vec<Property> {
        let mut properties = self.properties();
        properties.retain(|p| p.street_id == street_id);
        properties
    }

    /// Insert or replace a CDA by id.
    fn save_cda(&self, cda: &Cda) -> StoreResult<()>;

    /// Insert or replace a street by id.
    fn save_street(&self, street: &Street) -> StoreResult<()>;

    /// Insert or replace a property by id, then recompute the owning
    /// street's property-count aggregate.
    fn save_property(&self, property: &Property) -> StoreResult<()>;

    /// Delete a CDA and cascade to its streets and their properties.
    fn delete_cda(&self, id: i64) -> StoreResult<()>;

    /// Delete a street and cascade to its properties.
    fn delete_street(&self, id: i64) -> StoreResult<()>;

    /// Delete a property and recompute its street's aggregate.
    fn delete_property(&self, id: i64) -> StoreResult<()>;

    /// Recompute and persist one street's property-count aggregate from
    /// its live properties. Idempotent.
    fn recount_street(&self, street_id: i64) -> StoreResult<()>;

    /// Remove properties whose `street_id` references no existing street.
    /// Explicit repair operation; returns how many records were removed.
    fn prune_orphan_properties(&self) -> StoreResult<usize>;

    /// Remove all three collections.
    fn clear_all(&self) -> StoreResult<()>;

    /// Allocate a fresh id, unique across the three collections and
    /// monotonically increasing.
    fn next_id(&self) -> i64;
}
