use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// StartupRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single unicorn startup (one row of the source CSV after normalization).
#[derive(Debug, Clone)]
pub struct StartupRecord {
    /// Company name. Treated as an opaque label, not guaranteed unique.
    pub name: String,
    pub sector: String,
    pub location: String,
    /// Raw entry-date cell as it appeared in the CSV.
    pub entry_date: String,
    /// Calendar year extracted from `entry_date`; `None` when the date
    /// does not parse. Such rows never match a year-range filter.
    pub entry_year: Option<i32>,
    /// Valuation when the company first reached unicorn status, in $B.
    pub entry_valuation_usd_billions: Option<f64>,
    /// Most recently recorded valuation, in $B.
    pub current_valuation_usd_billions: Option<f64>,
    /// Free-text list of investor names.
    pub select_investors: Option<String>,
}

// ---------------------------------------------------------------------------
// StartupDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter-widget indices.
/// Immutable after load; the engine only ever reads from it.
#[derive(Debug, Clone)]
pub struct StartupDataset {
    /// All records, preserving original CSV row order.
    pub records: Vec<StartupRecord>,
    /// Unique sector labels in first-encountered order.
    pub sectors: Vec<String>,
    /// Unique location labels in first-encountered order.
    pub locations: Vec<String>,
    /// Observed (min, max) entry year, `None` if no row has a parsed year.
    pub year_bounds: Option<(i32, i32)>,
}

impl StartupDataset {
    /// Build widget indices from the loaded records.
    pub fn from_records(records: Vec<StartupRecord>) -> Self {
        let mut sectors = Vec::new();
        let mut locations = Vec::new();
        let mut year_bounds: Option<(i32, i32)> = None;

        for rec in &records {
            if !sectors.contains(&rec.sector) {
                sectors.push(rec.sector.clone());
            }
            if !locations.contains(&rec.location) {
                locations.push(rec.location.clone());
            }
            if let Some(y) = rec.entry_year {
                year_bounds = Some(match year_bounds {
                    Some((lo, hi)) => (lo.min(y), hi.max(y)),
                    None => (y, y),
                });
            }
        }

        StartupDataset {
            records,
            sectors,
            locations,
            year_bounds,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// FilterCriteria – transient, user-supplied
// ---------------------------------------------------------------------------

/// The filter selections collected from the sidebar. Rebuilt on every
/// interaction and immediately consumed by the aggregation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Selected sectors. Empty set means "no restriction", not "match nothing".
    pub sectors: BTreeSet<String>,
    /// Inclusive (min, max) entry-year range. Always active; defaults to
    /// the observed bounds of the dataset.
    pub year_range: (i32, i32),
    /// Selected locations. Empty set means "no restriction".
    pub locations: BTreeSet<String>,
}

impl FilterCriteria {
    /// Criteria matching everything a year filter can match: no sector or
    /// location restriction, year range spanning the observed bounds.
    pub fn full_range(dataset: &StartupDataset) -> Self {
        FilterCriteria {
            sectors: BTreeSet::new(),
            year_range: dataset.year_bounds.unwrap_or((0, 0)),
            locations: BTreeSet::new(),
        }
    }
}
