use std::collections::BTreeMap;

use super::model::StartupDataset;

// ---------------------------------------------------------------------------
// AggregateResult – everything the charts and KPI cards consume
// ---------------------------------------------------------------------------

/// Derived, read-only view over a filtered subset. Recomputed in full on
/// every filter change; never cached across interactions.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    /// Number of rows in the subset.
    pub total_count: usize,
    /// Sum of current valuations over non-null values, rounded to 2 dp.
    pub total_current_valuation: f64,
    /// Mean entry valuation over non-null values, `None` for an empty set.
    pub mean_entry_valuation: Option<f64>,
    /// Median current valuation over non-null values, `None` for an empty set.
    pub median_current_valuation: Option<f64>,
    /// Locations ranked by descending count, ties by first appearance, top 10.
    pub top_locations: Vec<(String, usize)>,
    /// Locations ranked by descending summed current valuation, top 10.
    pub valuation_by_location: Vec<(String, f64)>,
    /// Sectors ranked by descending count, top 10.
    pub top_sectors: Vec<(String, usize)>,
    /// Sectors ranked by descending count, top 5 (pie-chart proportions).
    pub sector_distribution: Vec<(String, usize)>,
    /// Row counts per observed entry year, ascending. Years with no rows
    /// in the subset are not synthesized as zero entries.
    pub yearly_counts: Vec<(i32, usize)>,
    /// Whitespace-token frequencies over `select_investors`. Multi-word
    /// investor names split into separate tokens.
    pub investor_word_frequencies: BTreeMap<String, usize>,
}

const TOP_N: usize = 10;
const PIE_N: usize = 5;

/// Compute every aggregate the dashboard renders from a filtered subset,
/// given as indices into `dataset.records`.
///
/// Pure and total: an empty subset yields zeros, `None`s, and empty
/// collections, never an error.
pub fn compute_aggregates(dataset: &StartupDataset, indices: &[usize]) -> AggregateResult {
    let subset: Vec<_> = indices.iter().map(|&i| &dataset.records[i]).collect();

    let current_valuations: Vec<f64> = subset
        .iter()
        .filter_map(|r| r.current_valuation_usd_billions)
        .collect();
    let entry_valuations: Vec<f64> = subset
        .iter()
        .filter_map(|r| r.entry_valuation_usd_billions)
        .collect();

    let mut yearly: BTreeMap<i32, usize> = BTreeMap::new();
    for rec in &subset {
        if let Some(y) = rec.entry_year {
            *yearly.entry(y).or_default() += 1;
        }
    }

    let mut word_frequencies: BTreeMap<String, usize> = BTreeMap::new();
    for rec in &subset {
        if let Some(investors) = &rec.select_investors {
            for token in investors.split_whitespace() {
                *word_frequencies.entry(token.to_string()).or_default() += 1;
            }
        }
    }

    AggregateResult {
        total_count: subset.len(),
        total_current_valuation: round2(current_valuations.iter().sum()),
        mean_entry_valuation: mean(&entry_valuations).map(round2),
        median_current_valuation: median(&current_valuations).map(round2),
        top_locations: ranked_counts(subset.iter().map(|r| r.location.as_str()), TOP_N),
        valuation_by_location: ranked_sums(
            subset
                .iter()
                .map(|r| (r.location.as_str(), r.current_valuation_usd_billions)),
            TOP_N,
        ),
        top_sectors: ranked_counts(subset.iter().map(|r| r.sector.as_str()), TOP_N),
        sector_distribution: ranked_counts(subset.iter().map(|r| r.sector.as_str()), PIE_N),
        yearly_counts: yearly.into_iter().collect(),
        investor_word_frequencies: word_frequencies,
    }
}

// ---------------------------------------------------------------------------
// Numeric helpers
// ---------------------------------------------------------------------------

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    })
}

// ---------------------------------------------------------------------------
// Ranking helpers – stable, first-encountered tie-break
// ---------------------------------------------------------------------------

/// Count occurrences of each label, rank descending by count, break ties by
/// first appearance (stable sort over insertion order), keep the top `limit`.
fn ranked_counts<'a>(labels: impl Iterator<Item = &'a str>, limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// Sum the non-null values per label, rank descending by sum, break ties by
/// first appearance, keep the top `limit`.
fn ranked_sums<'a>(
    pairs: impl Iterator<Item = (&'a str, Option<f64>)>,
    limit: usize,
) -> Vec<(String, f64)> {
    let mut sums: Vec<(String, f64)> = Vec::new();
    for (label, value) in pairs {
        let value = value.unwrap_or(0.0);
        match sums.iter_mut().find(|(l, _)| l == label) {
            Some((_, total)) => *total += value,
            None => sums.push((label.to_string(), value)),
        }
    }
    sums.sort_by(|a, b| b.1.total_cmp(&a.1));
    sums.truncate(limit);
    sums.iter_mut().for_each(|(_, v)| *v = round2(*v));
    sums
}
