use std::collections::BTreeSet;

use crate::color::CategoryColors;
use crate::data::aggregate::{compute_aggregates, AggregateResult};
use crate::data::filter::apply_filters;
use crate::data::model::{FilterCriteria, StartupDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<StartupDataset>,

    /// Current sidebar selections.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current filters (this frame's subset).
    pub visible_indices: Vec<usize>,

    /// Aggregates over the current subset, recomputed on every change.
    pub aggregates: Option<AggregateResult>,

    /// Stable colours per sector / location label.
    pub sector_colors: CategoryColors,
    pub location_colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: FilterCriteria {
                sectors: BTreeSet::new(),
                year_range: (0, 0),
                locations: BTreeSet::new(),
            },
            visible_indices: Vec::new(),
            aggregates: None,
            sector_colors: CategoryColors::default(),
            location_colors: CategoryColors::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, reset filters to the full range, and
    /// compute the initial aggregates.
    pub fn set_dataset(&mut self, dataset: StartupDataset) {
        self.criteria = FilterCriteria::full_range(&dataset);
        self.sector_colors = CategoryColors::new(dataset.sectors.iter().map(String::as_str));
        self.location_colors = CategoryColors::new(dataset.locations.iter().map(String::as_str));

        self.visible_indices = apply_filters(&dataset, &self.criteria);
        self.aggregates = Some(compute_aggregates(&dataset, &self.visible_indices));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute the subset and all aggregates from scratch. Invoked after
    /// every filter interaction.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = apply_filters(ds, &self.criteria);
            self.aggregates = Some(compute_aggregates(ds, &self.visible_indices));
        }
    }

    /// Toggle a sector in the filter set.
    pub fn toggle_sector(&mut self, sector: &str) {
        toggle(&mut self.criteria.sectors, sector);
        self.refilter();
    }

    /// Toggle a location in the filter set.
    pub fn toggle_location(&mut self, location: &str) {
        toggle(&mut self.criteria.locations, location);
        self.refilter();
    }

    /// Clear the sector selection (empty set = no restriction).
    pub fn clear_sectors(&mut self) {
        self.criteria.sectors.clear();
        self.refilter();
    }

    /// Clear the location selection.
    pub fn clear_locations(&mut self) {
        self.criteria.locations.clear();
        self.refilter();
    }

    /// Set the year range, clamped to the dataset's observed bounds and
    /// normalized so min ≤ max.
    pub fn set_year_range(&mut self, mut min: i32, mut max: i32) {
        if let Some(ds) = &self.dataset {
            if let Some((lo, hi)) = ds.year_bounds {
                min = min.clamp(lo, hi);
                max = max.clamp(lo, hi);
            }
        }
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        self.criteria.year_range = (min, max);
        self.refilter();
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::StartupRecord;

    fn record(sector: &str, location: &str, year: i32) -> StartupRecord {
        StartupRecord {
            name: "X".into(),
            sector: sector.into(),
            location: location.into(),
            entry_date: String::new(),
            entry_year: Some(year),
            entry_valuation_usd_billions: Some(1.0),
            current_valuation_usd_billions: Some(2.0),
            select_investors: None,
        }
    }

    fn state_with_dataset() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(StartupDataset::from_records(vec![
            record("Fintech", "Bangalore", 2020),
            record("Edtech", "Mumbai", 2022),
        ]));
        state
    }

    #[test]
    fn set_dataset_initializes_full_view() {
        let state = state_with_dataset();
        assert_eq!(state.criteria.year_range, (2020, 2022));
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.aggregates.as_ref().unwrap().total_count, 2);
    }

    #[test]
    fn toggling_a_sector_restricts_and_untoggling_restores() {
        let mut state = state_with_dataset();
        state.toggle_sector("Fintech");
        assert_eq!(state.visible_indices, vec![0]);
        state.toggle_sector("Fintech");
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn year_range_is_clamped_and_normalized() {
        let mut state = state_with_dataset();
        state.set_year_range(2025, 1990);
        assert_eq!(state.criteria.year_range, (2020, 2022));
    }

    #[test]
    fn clear_sectors_means_no_restriction() {
        let mut state = state_with_dataset();
        state.toggle_sector("Fintech");
        state.clear_sectors();
        assert_eq!(state.visible_indices, vec![0, 1]);
    }
}
