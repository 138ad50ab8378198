//! Pagination and dashboard rollups

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Cda, Street};

/// Page size used by the CDA directory listing.
pub const DIRECTORY_PAGE_SIZE: usize = 30;

/// Page size used by the dashboard card grid.
pub const DASHBOARD_PAGE_SIZE: usize = 12;

/// One page sliced from an already-filtered, already-sorted result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually returned (clamped into range)
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice out one fixed-size page. `page` is 1-based and clamped into the
/// valid range; an empty input yields a single empty page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_items = items.len();
    if page_size == 0 {
        return Page {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            total_items,
        };
    }

    let total_pages = total_items.div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));
    let start = (page - 1) * page_size;
    let items = items.iter().skip(start).take(page_size).cloned().collect();

    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}

/// Ward rollup for the dashboard: how many CDAs each ward holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WardStats {
    pub ward: String,
    pub cda_count: usize,
}

/// Count CDAs per ward, sorted lexicographically by ward label.
pub fn ward_stats(cdas: &[Cda]) -> Vec<WardStats> {
    let mut buckets: BTreeMap<&str, usize> = BTreeMap::new();
    for cda in cdas {
        *buckets.entry(cda.ward.as_str()).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(ward, cda_count)| WardStats {
            ward: ward.to_string(),
            cda_count,
        })
        .collect()
}

/// Live registry-wide totals for the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryTotals {
    pub cdas: usize,
    pub streets: usize,
    pub properties: u32,
}

/// Totals derived from the live collections rather than the per-CDA
/// snapshot counters.
pub fn registry_totals(cdas: &[Cda], streets: &[Street]) -> RegistryTotals {
    RegistryTotals {
        cdas: cdas.len(),
        streets: streets.len(),
        properties: streets.iter().map(|s| s.property_count.total()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginates_with_clamping() {
        let items: Vec<i32> = (1..=7).collect();

        let first = paginate(&items, 1, 3);
        assert_eq!(first.items, vec![1, 2, 3]);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_items, 7);

        let last = paginate(&items, 3, 3);
        assert_eq!(last.items, vec![7]);

        let beyond = paginate(&items, 99, 3);
        assert_eq!(beyond.page, 3);
        assert_eq!(beyond.items, vec![7]);

        let zero = paginate(&items, 0, 3);
        assert_eq!(zero.page, 1);
    }

    #[test]
    fn empty_input_is_one_empty_page() {
        let page = paginate::<i32>(&[], 1, DIRECTORY_PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn ward_stats_rolls_up_sorted() {
        let cdas = vec![
            Cda::new(1, "Phase 1 CDA", "Ward C1", "LGA"),
            Cda::new(2, "Sunrise CDA", "Ward C2", "LGA"),
            Cda::new(3, "Unity CDA", "Ward C1", "LGA"),
        ];

        let stats = ward_stats(&cdas);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].ward, "Ward C1");
        assert_eq!(stats[0].cda_count, 2);
        assert_eq!(stats[1].ward, "Ward C2");
    }
}
