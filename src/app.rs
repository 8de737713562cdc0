use std::path::Path;

use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, panels, wordcloud};

/// Bundled dataset path, loaded at startup when present.
const DEFAULT_DATASET: &str = "data/indian_unicorn_startups.csv";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct UnicornDashApp {
    pub state: AppState,
}

impl Default for UnicornDashApp {
    fn default() -> Self {
        let mut state = AppState::default();
        let default_path = Path::new(DEFAULT_DATASET);
        if default_path.exists() {
            panels::load_path(&mut state, default_path);
        }
        Self { state }
    }
}

impl eframe::App for UnicornDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs, charts, word cloud ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Central dashboard layout
// ---------------------------------------------------------------------------

/// Render the dashboard body from the current frame's aggregates.
fn dashboard(ui: &mut Ui, state: &AppState) {
    let Some(aggregates) = &state.aggregates else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open the unicorn startups CSV to begin  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Indian Unicorn Startups Dashboard");
            ui.add_space(8.0);

            panels::kpi_row(ui, aggregates);
            ui.add_space(12.0);

            ui.heading("Geographical insights");
            ui.columns(2, |columns: &mut [Ui]| {
                let counts: Vec<(String, f64)> = aggregates
                    .top_locations
                    .iter()
                    .map(|(l, n)| (l.clone(), *n as f64))
                    .collect();
                charts::bar_chart(
                    &mut columns[0],
                    "top_locations",
                    "Top locations by unicorn count",
                    &counts,
                    &state.location_colors,
                );
                charts::bar_chart(
                    &mut columns[1],
                    "valuation_by_location",
                    "Total valuation by location ($B)",
                    &aggregates.valuation_by_location,
                    &state.location_colors,
                );
            });
            ui.add_space(12.0);

            ui.heading("Sector insights");
            ui.columns(2, |columns: &mut [Ui]| {
                let counts: Vec<(String, f64)> = aggregates
                    .top_sectors
                    .iter()
                    .map(|(s, n)| (s.clone(), *n as f64))
                    .collect();
                charts::bar_chart(
                    &mut columns[0],
                    "top_sectors",
                    "Top sectors by unicorn count",
                    &counts,
                    &state.sector_colors,
                );
                charts::pie_chart(
                    &mut columns[1],
                    "Sector distribution",
                    &aggregates.sector_distribution,
                    &state.sector_colors,
                );
            });
            ui.add_space(12.0);

            charts::yearly_line_chart(ui, &aggregates.yearly_counts);
            ui.add_space(12.0);

            wordcloud::word_cloud(ui, &aggregates.investor_word_frequencies);
        });
}
