//! End-to-end test of the filter-and-aggregate engine: write a CSV, load
//! it, filter it, and check the aggregates the dashboard would render.

use std::collections::BTreeSet;
use std::io::Write;

use unicorn_dash::{apply_filters, compute_aggregates, load_csv, FilterCriteria};

const HEADER: &str =
    "Company,Sector,Location,Entry,Entry Valuation^^ ($B),Valuation ($B),Select Investors";

fn write_csv(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    write!(file, "{body}").unwrap();
    file
}

fn set(vals: &[&str]) -> BTreeSet<String> {
    vals.iter().map(|s| s.to_string()).collect()
}

#[test]
fn load_filter_aggregate_round_trip() {
    let file = write_csv(
        "PayZip,Fintech,Bangalore,01/03/2021,1.0,5.0,Sequoia Tiger Global\n\
         LendFast,Fintech,Mumbai,15/06/2022,1.2,3.0,Accel\n\
         Learnly,Edtech,Bangalore,20/09/2021,1.1,2.0,SoftBank\n\
         GhostCo,Logistics,Delhi,,1.0,9.0,Sequoia\n",
    );
    let dataset = load_csv(file.path()).unwrap();
    assert_eq!(dataset.len(), 4);
    // GhostCo's empty entry date never contributes a year.
    assert_eq!(dataset.year_bounds, Some((2021, 2022)));

    // Default criteria: full year range, no sector/location restriction.
    let criteria = FilterCriteria::full_range(&dataset);
    let subset = apply_filters(&dataset, &criteria);
    // GhostCo is dropped even from the unfiltered view.
    assert_eq!(subset, vec![0, 1, 2]);

    let agg = compute_aggregates(&dataset, &subset);
    assert_eq!(agg.total_count, 3);
    assert_eq!(agg.total_current_valuation, 10.0);
    assert_eq!(agg.yearly_counts, vec![(2021, 2), (2022, 1)]);

    // Narrow to Fintech 2021-2022.
    let criteria = FilterCriteria {
        sectors: set(&["Fintech"]),
        year_range: (2021, 2022),
        locations: BTreeSet::new(),
    };
    let subset = apply_filters(&dataset, &criteria);
    assert_eq!(subset, vec![0, 1]);

    let agg = compute_aggregates(&dataset, &subset);
    assert_eq!(agg.total_current_valuation, 8.0);
    assert_eq!(agg.mean_entry_valuation, Some(1.1));
    assert_eq!(agg.median_current_valuation, Some(4.0));
    assert_eq!(
        agg.top_locations,
        vec![("Bangalore".to_string(), 1), ("Mumbai".to_string(), 1)]
    );
    // Multi-word investor names split into separate tokens.
    assert_eq!(agg.investor_word_frequencies.get("Tiger"), Some(&1));
    assert_eq!(agg.investor_word_frequencies.get("Tiger Global"), None);
}

#[test]
fn unrestricted_criteria_match_every_year_in_range() {
    let file = write_csv(
        "A,Fintech,Pune,01/01/2019,1.0,1.5,\n\
         B,Fintech,Pune,01/01/2020,1.0,1.5,\n\
         C,Fintech,Pune,01/01/2021,1.0,1.5,\n",
    );
    let dataset = load_csv(file.path()).unwrap();

    let criteria = FilterCriteria {
        sectors: BTreeSet::new(),
        year_range: (2020, 2021),
        locations: BTreeSet::new(),
    };
    let subset = apply_filters(&dataset, &criteria);
    let in_range = dataset
        .records
        .iter()
        .filter(|r| matches!(r.entry_year, Some(y) if (2020..=2021).contains(&y)))
        .count();
    assert_eq!(subset.len(), in_range);
    assert_eq!(subset, vec![1, 2]);
}

#[test]
fn empty_subset_renders_as_defined_zeroes() {
    let file = write_csv("A,Fintech,Pune,01/01/2019,1.0,1.5,Sequoia\n");
    let dataset = load_csv(file.path()).unwrap();

    let criteria = FilterCriteria {
        sectors: set(&["Gaming"]),
        year_range: (2019, 2019),
        locations: BTreeSet::new(),
    };
    let subset = apply_filters(&dataset, &criteria);
    assert!(subset.is_empty());

    let agg = compute_aggregates(&dataset, &subset);
    assert_eq!(agg.total_count, 0);
    assert_eq!(agg.total_current_valuation, 0.0);
    assert_eq!(agg.mean_entry_valuation, None);
    assert!(agg.top_locations.is_empty());
    assert!(agg.yearly_counts.is_empty());
}
