//! Directory filtering: grouping, street and CDA predicates, and the
//! property-type search mode

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::query::filters::DirectoryFilters;
use crate::types::{is_known_type_label, Cda, Property, PropertyCategory, Street};

/// One CDA surviving the filters, with its surviving streets.
#[derive(Debug, Clone, Serialize)]
pub struct CdaEntry<'a> {
    pub cda: &'a Cda,
    pub streets: Vec<&'a Street>,
}

/// Counts reported when the search term named a property type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyModeSummary {
    /// The type label that triggered property mode
    pub term: String,
    pub properties: usize,
    pub streets: usize,
    pub cdas: usize,
}

/// Summary counts over the filtered view. Totals are derived live from
/// the surviving streets, not from the stale per-CDA snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorySummary {
    pub cdas: usize,
    pub streets: usize,
    pub properties: u32,
    pub property_mode: Option<PropertyModeSummary>,
}

/// The filtered directory: surviving CDAs (sorted by name) with their
/// surviving streets, plus summary counts.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryView<'a> {
    pub entries: Vec<CdaEntry<'a>>,
    pub summary: DirectorySummary,
}

/// Group streets into `ward -> CDA name -> streets`. BTreeMaps keep both
/// levels lexicographically ordered.
pub fn group_streets(streets: &[Street]) -> BTreeMap<&str, BTreeMap<&str, Vec<&Street>>> {
    let mut grouped: BTreeMap<&str, BTreeMap<&str, Vec<&Street>>> = BTreeMap::new();
    for street in streets {
        grouped
            .entry(street.ward.as_str())
            .or_default()
            .entry(street.cda.as_str())
            .or_default()
            .push(street);
    }
    grouped
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether a street carries at least one property matching any of the
/// selected type labels. Canonical labels match by category; custom
/// labels fall back to substring matching, including against the
/// street's legacy type tags.
fn street_has_property_type(street: &Street, live: &[&Property], selected: &[String]) -> bool {
    selected.iter().any(|label| {
        let category = PropertyCategory::classify(label);
        if category != PropertyCategory::Other {
            live.iter()
                .any(|p| PropertyCategory::classify(&p.type_name) == category)
        } else {
            live.iter().any(|p| contains_ci(&p.type_name, label))
                || street
                    .properties
                    .iter()
                    .any(|tag| contains_ci(&tag.type_name, label))
        }
    })
}

/// Street-level predicate, applied before the CDA predicate.
fn street_matches(street: &Street, live: &[&Property], filters: &DirectoryFilters) -> bool {
    if filters.date_range.is_active() {
        match NaiveDate::parse_from_str(&street.registration_date, "%Y-%m-%d") {
            Ok(date) if filters.date_range.contains(date) => {}
            _ => return false,
        }
    }

    let street_term = filters.street_search.trim();
    if !street_term.is_empty() && !contains_ci(&street.name, street_term) {
        return false;
    }

    if !filters.property_types.is_empty()
        && !street_has_property_type(street, live, &filters.property_types)
    {
        return false;
    }

    filters
        .street_property_range
        .contains(street.property_count.total())
}

/// CDA-level predicate over the streets that survived the street filters.
fn cda_matches(cda: &Cda, surviving: &[&Street], filters: &DirectoryFilters) -> bool {
    if let Some(ward) = filters.ward.as_deref() {
        if cda.ward != ward {
            return false;
        }
    }

    // Without a ward view, a CDA must have at least one matching street;
    // inside a ward view, empty CDAs stay visible.
    if surviving.is_empty() && filters.ward.is_none() {
        return false;
    }

    let term = filters.search.trim();
    if !term.is_empty() {
        let hit = contains_ci(&cda.name, term)
            || contains_ci(&cda.ward, term)
            || surviving.iter().any(|s| contains_ci(&s.name, term));
        if !hit {
            return false;
        }
    }

    if !filters.cdas.is_empty() && !filters.cdas.iter().any(|name| name == &cda.name) {
        return false;
    }

    let total: u32 = surviving.iter().map(|s| s.property_count.total()).sum();
    filters.property_range.contains(total)
}

/// Derive the filtered directory view from full snapshots.
///
/// When the search term case-insensitively equals a known property-type
/// label, the view switches to property mode: the property collection is
/// filtered by type substring and mapped back through streets to CDAs,
/// and the summary reports the induced subset.
pub fn filter_directory<'a>(
    cdas: &'a [Cda],
    streets: &'a [Street],
    properties: &'a [Property],
    filters: &DirectoryFilters,
) -> DirectoryView<'a> {
    let term = filters.search.trim();
    if is_known_type_label(term) {
        return property_mode_view(cdas, streets, properties, filters, term);
    }

    let mut live_by_street: HashMap<i64, Vec<&Property>> = HashMap::new();
    for property in properties {
        live_by_street
            .entry(property.street_id)
            .or_default()
            .push(property);
    }
    let empty: Vec<&Property> = Vec::new();

    let mut entries: Vec<CdaEntry<'_>> = Vec::new();
    for cda in cdas {
        let surviving: Vec<&Street> = streets
            .iter()
            .filter(|s| s.cda == cda.name && s.ward == cda.ward)
            .filter(|s| {
                let live = live_by_street.get(&s.id).unwrap_or(&empty);
                street_matches(s, live, filters)
            })
            .collect();

        if cda_matches(cda, &surviving, filters) {
            entries.push(CdaEntry {
                cda,
                streets: surviving,
            });
        }
    }
    entries.sort_by(|a, b| a.cda.name.cmp(&b.cda.name));

    let streets_total = entries.iter().map(|e| e.streets.len()).sum();
    let properties_total = entries
        .iter()
        .flat_map(|e| e.streets.iter())
        .map(|s| s.property_count.total())
        .sum();

    DirectoryView {
        summary: DirectorySummary {
            cdas: entries.len(),
            streets: streets_total,
            properties: properties_total,
            property_mode: None,
        },
        entries,
    }
}

fn property_mode_view<'a>(
    cdas: &'a [Cda],
    streets: &'a [Street],
    properties: &'a [Property],
    filters: &DirectoryFilters,
    term: &str,
) -> DirectoryView<'a> {
    let hits: Vec<&Property> = properties
        .iter()
        .filter(|p| contains_ci(&p.type_name, term))
        .collect();
    let hit_street_ids: HashSet<i64> = hits.iter().map(|p| p.street_id).collect();

    let induced: Vec<&Street> = streets
        .iter()
        .filter(|s| hit_street_ids.contains(&s.id))
        .filter(|s| filters.ward.as_deref().map_or(true, |w| s.ward == w))
        .collect();
    let induced_ids: HashSet<i64> = induced.iter().map(|s| s.id).collect();

    let mut entries: Vec<CdaEntry<'_>> = Vec::new();
    for cda in cdas {
        let own: Vec<&Street> = induced
            .iter()
            .copied()
            .filter(|s| s.cda == cda.name && s.ward == cda.ward)
            .collect();
        if !own.is_empty() {
            entries.push(CdaEntry { cda, streets: own });
        }
    }
    entries.sort_by(|a, b| a.cda.name.cmp(&b.cda.name));

    // Orphaned hits (street no longer present) are excluded from counts.
    let matched = hits
        .iter()
        .filter(|p| induced_ids.contains(&p.street_id))
        .count();
    let streets_total: usize = entries.iter().map(|e| e.streets.len()).sum();

    DirectoryView {
        summary: DirectorySummary {
            cdas: entries.len(),
            streets: streets_total,
            properties: matched as u32,
            property_mode: Some(PropertyModeSummary {
                term: term.to_string(),
                properties: matched,
                streets: streets_total,
                cdas: entries.len(),
            }),
        },
        entries,
    }
}
