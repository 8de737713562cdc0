use std::collections::BTreeSet;
use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::aggregate::AggregateResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state inside the loop.
    let sectors = dataset.sectors.clone();
    let locations = dataset.locations.clone();
    let year_bounds = dataset.year_bounds;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year range slider ----
            if let Some((lo, hi)) = year_bounds {
                ui.strong("Entry year");
                let (mut min, mut max) = state.criteria.year_range;
                let mut changed = false;
                changed |= ui
                    .add(egui::Slider::new(&mut min, lo..=hi).text("from"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut max, lo..=hi).text("to"))
                    .changed();
                if changed {
                    state.set_year_range(min, max);
                }
                ui.separator();
            }

            // ---- Sector multiselect ----
            category_filter(
                ui,
                "Sectors",
                &sectors,
                &state.criteria.sectors.clone(),
                |state: &mut AppState, label| state.toggle_sector(label),
                |state: &mut AppState| state.clear_sectors(),
                state,
            );

            ui.separator();

            // ---- Location multiselect ----
            category_filter(
                ui,
                "Locations",
                &locations,
                &state.criteria.locations.clone(),
                |state: &mut AppState, label| state.toggle_location(label),
                |state: &mut AppState| state.clear_locations(),
                state,
            );
        });
}

/// One collapsible multiselect list. An empty selection means "no
/// restriction", mirroring the dashboard's default-empty multiselects, so
/// the header shows "all" rather than "0".
fn category_filter(
    ui: &mut Ui,
    name: &str,
    labels: &[String],
    selected: &BTreeSet<String>,
    toggle: impl Fn(&mut AppState, &str),
    clear: impl Fn(&mut AppState),
    state: &mut AppState,
) {
    let header = if selected.is_empty() {
        format!("{name}  (all)")
    } else {
        format!("{name}  ({}/{})", selected.len(), labels.len())
    };

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt(name)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if ui.small_button("Clear").clicked() {
                clear(state);
            }
            for label in labels {
                let mut checked = selected.contains(label);
                if ui.checkbox(&mut checked, label).changed() {
                    toggle(state, label);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} unicorns loaded, {} match filters",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

/// Render the four key-metric cards in a single row.
pub fn kpi_row(ui: &mut Ui, aggregates: &AggregateResult) {
    ui.columns(4, |columns: &mut [Ui]| {
        kpi_card(
            &mut columns[0],
            "Total unicorns",
            aggregates.total_count.to_string(),
        );
        kpi_card(
            &mut columns[1],
            "Total valuation ($B)",
            format!("{:.2}", aggregates.total_current_valuation),
        );
        kpi_card(
            &mut columns[2],
            "Avg entry valuation ($B)",
            format_opt(aggregates.mean_entry_valuation),
        );
        kpi_card(
            &mut columns[3],
            "Median valuation ($B)",
            format_opt(aggregates.median_current_valuation),
        );
    });
}

fn kpi_card(ui: &mut Ui, title: &str, value: String) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading());
            });
        });
}

fn format_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "–".to_string(),
    }
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open unicorn startups CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Load a CSV into the app state, reporting failures via the status line.
pub fn load_path(state: &mut AppState, path: &Path) {
    state.loading = true;
    match crate::data::loader::load_csv(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} unicorns across {} sectors and {} locations",
                dataset.len(),
                dataset.sectors.len(),
                dataset.locations.len()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", path.display());
            state.status_message = Some(format!("Error: {e}"));
            state.loading = false;
        }
    }
}
