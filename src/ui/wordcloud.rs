use std::collections::BTreeMap;

use eframe::egui::{RichText, Ui};

use crate::color::generate_palette;

/// Maximum number of tokens laid out in the cloud.
const MAX_TOKENS: usize = 40;
const MIN_FONT: f32 = 12.0;
const MAX_FONT: f32 = 36.0;

/// Render the investor word cloud: tokens laid out in a wrapping row, font
/// size proportional to frequency, most frequent first.
pub fn word_cloud(ui: &mut Ui, frequencies: &BTreeMap<String, usize>) {
    ui.strong("Top investors word cloud");

    if frequencies.is_empty() {
        ui.label("No investor data for the current filters.");
        return;
    }

    // Rank by descending count; BTreeMap iteration makes equal-count
    // ordering alphabetical and deterministic.
    let mut ranked: Vec<(&String, &usize)> = frequencies.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1));
    ranked.truncate(MAX_TOKENS);

    let max_count = *ranked[0].1 as f32;
    let palette = generate_palette(ranked.len());

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = 10.0;
        for (i, (token, count)) in ranked.iter().enumerate() {
            let weight = **count as f32 / max_count;
            let size = MIN_FONT + (MAX_FONT - MIN_FONT) * weight;
            ui.label(
                RichText::new(token.as_str())
                    .size(size)
                    .color(palette[i % palette.len()]),
            )
            .on_hover_text(format!("{token}: {count}"));
        }
    });
}
