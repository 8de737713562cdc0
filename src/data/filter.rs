use super::model::{FilterCriteria, StartupDataset};

// ---------------------------------------------------------------------------
// Filter predicate
// ---------------------------------------------------------------------------

/// Return indices of records that pass all active filters, preserving the
/// relative order of retained rows.
///
/// A record passes when:
/// * `criteria.sectors` is empty (no restriction) or contains its sector
/// * its `entry_year` is present and falls inside `criteria.year_range`
///   (inclusive both ends)
/// * `criteria.locations` is empty or contains its location
///
/// The year filter is always active, so records whose entry date failed to
/// parse are excluded from every view, even under the default full range.
pub fn apply_filters(dataset: &StartupDataset, criteria: &FilterCriteria) -> Vec<usize> {
    let (min_year, max_year) = criteria.year_range;
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if !criteria.sectors.is_empty() && !criteria.sectors.contains(&rec.sector) {
                return false;
            }
            match rec.entry_year {
                Some(y) if (min_year..=max_year).contains(&y) => {}
                _ => return false,
            }
            if !criteria.locations.is_empty() && !criteria.locations.contains(&rec.location) {
                return false;
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::model::StartupRecord;

    fn record(sector: &str, location: &str, year: Option<i32>) -> StartupRecord {
        StartupRecord {
            name: "X".into(),
            sector: sector.into(),
            location: location.into(),
            entry_date: String::new(),
            entry_year: year,
            entry_valuation_usd_billions: None,
            current_valuation_usd_billions: None,
            select_investors: None,
        }
    }

    fn dataset() -> StartupDataset {
        StartupDataset::from_records(vec![
            record("Fintech", "Bangalore", Some(2021)),
            record("Fintech", "Mumbai", Some(2022)),
            record("Edtech", "Bangalore", Some(2021)),
            record("Logistics", "Delhi", None),
        ])
    }

    fn set(vals: &[&str]) -> BTreeSet<String> {
        vals.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_sets_restrict_nothing_but_year_still_applies() {
        let ds = dataset();
        let criteria = FilterCriteria::full_range(&ds);
        // The null-year row is dropped even under the default full range.
        assert_eq!(apply_filters(&ds, &criteria), vec![0, 1, 2]);
    }

    #[test]
    fn sector_filter_intersects_with_year_range() {
        let ds = dataset();
        let criteria = FilterCriteria {
            sectors: set(&["Fintech"]),
            year_range: (2021, 2022),
            locations: BTreeSet::new(),
        };
        assert_eq!(apply_filters(&ds, &criteria), vec![0, 1]);
    }

    #[test]
    fn location_filter_applies() {
        let ds = dataset();
        let criteria = FilterCriteria {
            sectors: BTreeSet::new(),
            year_range: (2021, 2022),
            locations: set(&["Bangalore"]),
        };
        assert_eq!(apply_filters(&ds, &criteria), vec![0, 2]);
    }

    #[test]
    fn year_range_bounds_are_inclusive() {
        let ds = dataset();
        let criteria = FilterCriteria {
            sectors: BTreeSet::new(),
            year_range: (2022, 2022),
            locations: BTreeSet::new(),
        };
        assert_eq!(apply_filters(&ds, &criteria), vec![1]);
    }

    #[test]
    fn null_year_rows_never_match() {
        let ds = dataset();
        let criteria = FilterCriteria {
            sectors: set(&["Logistics"]),
            year_range: (i32::MIN, i32::MAX),
            locations: BTreeSet::new(),
        };
        assert!(apply_filters(&ds, &criteria).is_empty());
    }

    #[test]
    fn retained_rows_keep_relative_order() {
        let ds = dataset();
        let criteria = FilterCriteria {
            sectors: BTreeSet::new(),
            year_range: (2021, 2021),
            locations: BTreeSet::new(),
        };
        assert_eq!(apply_filters(&ds, &criteria), vec![0, 2]);
    }
}
