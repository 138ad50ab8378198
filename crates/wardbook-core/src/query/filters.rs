//! Filter state for the directory views

use chrono::NaiveDate;

/// Inclusive numeric range. The default is unbounded, meaning the filter
/// is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRange {
    pub min: u32,
    pub max: u32,
}

impl Default for NumericRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: u32::MAX,
        }
    }
}

impl NumericRange {
    /// Bounded range, both ends inclusive.
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `value` falls within the range.
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether the range restricts anything.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

/// Optional date-only range, inclusive on whichever bounds are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Whether either bound is set.
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Whether `date` falls within the set bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// The full filter state of the CDA directory.
///
/// Street-level criteria (`date_range`, `street_search`,
/// `property_types`, `street_property_range`) narrow each CDA's streets
/// first; the CDA-level criteria then decide whether the CDA itself stays
/// visible given its surviving streets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryFilters {
    /// Restrict to one ward. Viewing a specific ward keeps CDAs without
    /// matching streets visible.
    pub ward: Option<String>,

    /// Free-text search over CDA name, ward, and surviving street names.
    /// When the term equals a known property-type label the directory
    /// switches to property-search mode.
    pub search: String,

    /// Keep only CDAs whose name is in this list (empty = all)
    pub cdas: Vec<String>,

    /// Aggregate property count per CDA, over its surviving streets
    pub property_range: NumericRange,

    /// Street registration date window
    pub date_range: DateRange,

    /// Selected property-type labels a street must carry at least one of
    pub property_types: Vec<String>,

    /// Substring match on street names
    pub street_search: String,

    /// Property count per street
    pub street_property_range: NumericRange,
}

impl DirectoryFilters {
    /// Filter state restricted to a single ward, everything else unset.
    pub fn for_ward(ward: impl Into<String>) -> Self {
        Self {
            ward: Some(ward.into()),
            ..Self::default()
        }
    }

    /// Number of active criteria, for "N filters applied" displays.
    pub fn active_count(&self) -> usize {
        self.cdas.len()
            + self.property_types.len()
            + usize::from(self.date_range.is_active())
            + usize::from(self.property_range.is_active())
            + usize::from(!self.search.trim().is_empty())
            + usize::from(!self.street_search.trim().is_empty())
            + usize::from(self.street_property_range.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn numeric_range_is_inclusive() {
        let range = NumericRange::new(2, 5);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(5));
        assert!(!range.contains(6));
    }

    #[test]
    fn default_numeric_range_is_inactive() {
        assert!(!NumericRange::default().is_active());
        assert!(NumericRange::new(0, 100).is_active());
    }

    #[test]
    fn date_range_bounds_are_optional_and_inclusive() {
        let open = DateRange::default();
        assert!(!open.is_active());
        assert!(open.contains(date("2023-03-15")));

        let from = DateRange::new(Some(date("2023-03-15")), None);
        assert!(from.contains(date("2023-03-15")));
        assert!(!from.contains(date("2023-03-14")));

        let bounded = DateRange::new(Some(date("2023-01-01")), Some(date("2023-06-30")));
        assert!(bounded.contains(date("2023-06-30")));
        assert!(!bounded.contains(date("2023-07-01")));
    }

    #[test]
    fn active_count_tallies_set_criteria() {
        let mut filters = DirectoryFilters::default();
        assert_eq!(filters.active_count(), 0);

        filters.cdas = vec!["Phase 1 CDA".into()];
        filters.search = "palm".into();
        filters.street_property_range = NumericRange::new(0, 10);
        assert_eq!(filters.active_count(), 3);
    }
}
