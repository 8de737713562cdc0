use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use super::model::{StartupDataset, StartupRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load failures. Per-row date/number parse failures are NOT errors;
/// they degrade to `None` fields on the affected record.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV is missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Raw CSV row – source header names, including the decorated valuation
// columns, are renamed here to the canonical field names.
// ---------------------------------------------------------------------------

/// Source headers the file must carry. The two valuation headers are the
/// decorated originals from the Kaggle export.
const REQUIRED_COLUMNS: [&str; 7] = [
    "Company",
    "Sector",
    "Location",
    "Entry",
    "Entry Valuation^^ ($B)",
    "Valuation ($B)",
    "Select Investors",
];

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Sector")]
    sector: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Entry")]
    entry: Option<String>,
    #[serde(rename = "Entry Valuation^^ ($B)")]
    entry_valuation: Option<String>,
    #[serde(rename = "Valuation ($B)")]
    current_valuation: Option<String>,
    #[serde(rename = "Select Investors")]
    select_investors: Option<String>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and normalize the unicorn-startups CSV.
///
/// The file must be UTF-8 with a header row containing at least the
/// columns in [`REQUIRED_COLUMNS`]; extra columns are ignored. Row order
/// is preserved.
pub fn load_csv(path: &Path) -> Result<StartupDataset, DataLoadError> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataLoadError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let raw = row?;
        let entry_date = raw.entry.unwrap_or_default();
        records.push(StartupRecord {
            name: raw.company,
            sector: raw.sector,
            location: raw.location,
            entry_year: parse_entry_year(&entry_date),
            entry_date,
            entry_valuation_usd_billions: raw.entry_valuation.as_deref().and_then(parse_valuation),
            current_valuation_usd_billions: raw
                .current_valuation
                .as_deref()
                .and_then(parse_valuation),
            select_investors: raw.select_investors.filter(|s| !s.is_empty()),
        });
    }

    Ok(StartupDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Per-cell parsing – lenient, never fatal
// ---------------------------------------------------------------------------

/// Extract the calendar year from an entry-date cell.
///
/// The source data mixes full dates and month-year forms, so a handful of
/// formats are tried in order; the first that parses wins. Anything else
/// yields `None` (the row is then excluded from every year-filtered view).
fn parse_entry_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%m/%d/%Y", "%Y-%m-%d", "%d-%m-%Y"];
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.year());
        }
    }

    // Month-year forms ("Sep-2021", "Sep-21", "September 2021"): prepend a
    // day so NaiveDate can parse them.
    const MONTH_FORMATS: [&str; 4] = ["%d %b-%Y", "%d %b-%y", "%d %B %Y", "%d %b %Y"];
    let with_day = format!("1 {s}");
    for fmt in MONTH_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&with_day, fmt) {
            return Some(d.year());
        }
    }

    // Bare four-digit year.
    if s.len() == 4 {
        if let Ok(y) = s.parse::<i32>() {
            return Some(y);
        }
    }

    None
}

/// Parse a valuation cell, tolerating "$" prefixes and thousands separators.
fn parse_valuation(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str =
        "Company,Sector,Location,Entry,Entry Valuation^^ ($B),Valuation ($B),Select Investors";

    fn write_csv(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        write!(file, "{body}").unwrap();
        file
    }

    #[test]
    fn loads_and_normalizes_columns() {
        let file = write_csv(
            "Flipkart,E-commerce,Bangalore,01/05/2012,$1.0,37.6,\"Accel, Tiger Global\"\n",
        );
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        let rec = &ds.records[0];
        assert_eq!(rec.name, "Flipkart");
        assert_eq!(rec.entry_year, Some(2012));
        assert_eq!(rec.entry_valuation_usd_billions, Some(1.0));
        assert_eq!(rec.current_valuation_usd_billions, Some(37.6));
        assert_eq!(rec.select_investors.as_deref(), Some("Accel, Tiger Global"));
    }

    #[test]
    fn unparseable_date_yields_null_year() {
        let file = write_csv("Acme,Fintech,Mumbai,not-a-date,1.0,2.0,Sequoia\n");
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.records[0].entry_year, None);
        assert_eq!(ds.year_bounds, None);
    }

    #[test]
    fn empty_date_yields_null_year() {
        let file = write_csv("Acme,Fintech,Mumbai,,1.0,2.0,Sequoia\n");
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.records[0].entry_year, None);
    }

    #[test]
    fn month_year_date_form_parses() {
        let file = write_csv("Acme,Fintech,Mumbai,Sep-2021,1.0,2.0,Sequoia\n");
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.records[0].entry_year, Some(2021));
    }

    #[test]
    fn blank_numeric_cells_become_none() {
        let file = write_csv("Acme,Fintech,Mumbai,01/05/2012,,,\n");
        let ds = load_csv(file.path()).unwrap();
        let rec = &ds.records[0];
        assert_eq!(rec.entry_valuation_usd_billions, None);
        assert_eq!(rec.current_valuation_usd_billions, None);
        assert_eq!(rec.select_investors, None);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Company,Sector,Location,Entry").unwrap();
        writeln!(file, "Acme,Fintech,Mumbai,01/05/2012").unwrap();
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingColumn("Entry Valuation^^ ($B)")
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_csv(Path::new("/nonexistent/unicorns.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
    }

    #[test]
    fn row_order_is_preserved() {
        let file = write_csv(
            "B,Fintech,Mumbai,01/05/2012,1.0,2.0,\n\
             A,Edtech,Pune,01/05/2013,1.0,2.0,\n",
        );
        let ds = load_csv(file.path()).unwrap();
        let names: Vec<&str> = ds.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
