//! The JSON-array registry backend
//!
//! Each collection is one JSON array under a fixed key. Every mutation is
//! a full read-modify-write of the affected collection(s) — fine at the
//! expected scale of tens to low hundreds of records, and the documented
//! ceiling beyond that.

use chrono::{Local, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info};

use wardbook_core::{tally_properties, Cda, Property, Registry, Street};
use wardbook_core::{StoreError, StoreResult};

use crate::kv::KeyValueStore;

/// Storage key for the CDA collection.
pub const CDAS_KEY: &str = "cda_registry_cdas";

/// Storage key for the street collection.
pub const STREETS_KEY: &str = "cda_registry_streets";

/// Storage key for the property collection.
pub const PROPERTIES_KEY: &str = "cda_registry_properties";

const DATE_FMT: &str = "%Y-%m-%d";

/// [`Registry`] implementation over any [`KeyValueStore`].
pub struct JsonRegistry<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> JsonRegistry<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Read a collection, degrading to empty on any failure.
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.kv.get(key) {
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(items) => items,
                Err(err) => {
                    error!("Discarding unparseable {} collection: {}", key, err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                error!("Failed to read {} collection: {}", key, err);
                Vec::new()
            }
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()> {
        let text = serde_json::to_string(items)
            .map_err(|err| StoreError::serialization(err.to_string()))?;
        self.kv.set(key, &text).map_err(|err| {
            error!("Failed to write {} collection: {}", key, err);
            StoreError::from(err)
        })
    }

    /// Raw streets without date repair, for mutations that write back.
    fn raw_streets(&self) -> Vec<Street> {
        self.read_collection(STREETS_KEY)
    }

    fn recount_in_place(&self, streets: &mut [Street], street_id: i64) -> StoreResult<bool> {
        let Some(street) = streets.iter_mut().find(|s| s.id == street_id) else {
            debug!("Recount skipped, street {} not found", street_id);
            return Ok(false);
        };
        let fresh = tally_properties(&self.properties_on_street(street_id));
        if street.property_count == fresh {
            return Ok(false);
        }
        street.property_count = fresh;
        Ok(true)
    }
}

fn upsert_by_id<T, F: Fn(&T) -> i64>(items: &mut Vec<T>, item: T, id_of: F) {
    let id = id_of(&item);
    match items.iter_mut().find(|existing| id_of(existing) == id) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

impl<K: KeyValueStore> Registry for JsonRegistry<K> {
    fn cdas(&self) -> Vec<Cda> {
        self.read_collection(CDAS_KEY)
    }

    fn streets(&self) -> Vec<Street> {
        let mut streets = self.raw_streets();
        // repair invalid registration dates in the returned snapshot only
        let today = Local::now().date_naive().format(DATE_FMT).to_string();
        for street in &mut streets {
            if NaiveDate::parse_from_str(&street.registration_date, DATE_FMT).is_err() {
                debug!(
                    "Repairing registration date {:?} on street {}",
                    street.registration_date, street.id
                );
                street.registration_date = today.clone();
            }
        }
        streets
    }

    fn properties(&self) -> Vec<Property> {
        self.read_collection(PROPERTIES_KEY)
    }

    fn save_cda(&self, cda: &Cda) -> StoreResult<()> {
        let mut cdas = self.cdas();
        upsert_by_id(&mut cdas, cda.clone(), |c| c.id);
        self.write_collection(CDAS_KEY, &cdas)
    }

    fn save_street(&self, street: &Street) -> StoreResult<()> {
        let mut streets = self.raw_streets();
        upsert_by_id(&mut streets, street.clone(), |s| s.id);
        self.write_collection(STREETS_KEY, &streets)
    }

    fn save_property(&self, property: &Property) -> StoreResult<()> {
        let mut properties = self.properties();
        upsert_by_id(&mut properties, property.clone(), |p| p.id);
        self.write_collection(PROPERTIES_KEY, &properties)?;
        self.recount_street(property.street_id)
    }

    fn delete_cda(&self, id: i64) -> StoreResult<()> {
        let mut cdas = self.cdas();
        let Some(deleted) = cdas.iter().find(|c| c.id == id).cloned() else {
            return Ok(());
        };
        cdas.retain(|c| c.id != id);
        self.write_collection(CDAS_KEY, &cdas)?;

        // cascade: streets owned by name, then their properties
        let mut streets = self.raw_streets();
        let doomed: Vec<i64> = streets
            .iter()
            .filter(|s| s.cda == deleted.name)
            .map(|s| s.id)
            .collect();
        streets.retain(|s| s.cda != deleted.name);
        self.write_collection(STREETS_KEY, &streets)?;

        let mut properties = self.properties();
        properties.retain(|p| !doomed.contains(&p.street_id));
        self.write_collection(PROPERTIES_KEY, &properties)?;

        info!(
            "Deleted CDA {} ({}) with {} street(s)",
            id,
            deleted.name,
            doomed.len()
        );
        Ok(())
    }

    fn delete_street(&self, id: i64) -> StoreResult<()> {
        let mut streets = self.raw_streets();
        streets.retain(|s| s.id != id);
        self.write_collection(STREETS_KEY, &streets)?;

        let mut properties = self.properties();
        properties.retain(|p| p.street_id != id);
        self.write_collection(PROPERTIES_KEY, &properties)
    }

    fn delete_property(&self, id: i64) -> StoreResult<()> {
        let mut properties = self.properties();
        let Some(deleted) = properties.iter().find(|p| p.id == id).cloned() else {
            return Ok(());
        };
        properties.retain(|p| p.id != id);
        self.write_collection(PROPERTIES_KEY, &properties)?;
        self.recount_street(deleted.street_id)
    }

    fn recount_street(&self, street_id: i64) -> StoreResult<()> {
        let mut streets = self.raw_streets();
        if self.recount_in_place(&mut streets, street_id)? {
            self.write_collection(STREETS_KEY, &streets)?;
        }
        Ok(())
    }

    fn prune_orphan_properties(&self) -> StoreResult<usize> {
        let valid: Vec<i64> = self.raw_streets().iter().map(|s| s.id).collect();
        let mut properties = self.properties();
        let before = properties.len();
        properties.retain(|p| valid.contains(&p.street_id));
        let removed = before - properties.len();

        if removed > 0 {
            self.write_collection(PROPERTIES_KEY, &properties)?;
            info!("Pruned {} orphaned propert(ies)", removed);
        }
        Ok(removed)
    }

    fn clear_all(&self) -> StoreResult<()> {
        for key in [CDAS_KEY, STREETS_KEY, PROPERTIES_KEY] {
            self.kv.remove(key).map_err(StoreError::from)?;
        }
        Ok(())
    }

    fn next_id(&self) -> i64 {
        let floor = self
            .cdas()
            .into_iter()
            .map(|c| c.id)
            .chain(self.raw_streets().into_iter().map(|s| s.id))
            .chain(self.properties().into_iter().map(|p| p.id))
            .max()
            .unwrap_or(0);
        Utc::now().timestamp_millis().max(floor + 1)
    }
}
