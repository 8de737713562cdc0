//! Unicorn Dash
//!
//! Interactive dashboard for the Indian unicorn startups dataset.
//!
//! The `data` module is the UI-independent core: load a CSV once, then
//! treat every user interaction as a pure
//! (dataset, criteria) → AggregateResult computation. The `ui` and `app`
//! modules are the egui shell that re-invokes that computation on every
//! filter change.
//!
//! Binaries:
//! - `unicorn-dash`: the dashboard application
//! - `generate_sample`: deterministic sample-CSV generator

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;

pub use data::aggregate::{compute_aggregates, AggregateResult};
pub use data::filter::apply_filters;
pub use data::loader::{load_csv, DataLoadError};
pub use data::model::{FilterCriteria, StartupDataset, StartupRecord};
