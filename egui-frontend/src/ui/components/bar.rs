//! Percentage Bar Component
//!
//! One labeled row: label on the left, a track filled to `round(fraction × 100)`
//! percent, and the percentage text on the right.

use eframe::egui;
use shared::bar_percentage;

use crate::ui::components::theme::colors;

/// Sizing for a bar row
#[derive(Debug, Clone)]
pub struct BarConfig {
    pub label_width: f32,
    pub value_width: f32,
    pub track_height: f32,
    pub rounding: f32,
    pub label_font_size: f32,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            label_width: 190.0,
            value_width: 44.0,
            track_height: 10.0,
            rounding: 5.0,
            label_font_size: 13.0,
        }
    }
}

/// Width of the filled part of a track for a whole percentage
pub fn fill_width(track_width: f32, percentage: u32) -> f32 {
    track_width * (percentage.min(100) as f32 / 100.0)
}

/// Draw a labeled bar for a 0–1 fraction
pub fn render_bar(ui: &mut egui::Ui, label: &str, fraction: f64) {
    let config = BarConfig::default();
    let percentage = bar_percentage(fraction);
    let font = egui::FontId::new(config.label_font_size, egui::FontFamily::Proportional);

    ui.horizontal(|ui| {
        ui.add_sized(
            [config.label_width, config.track_height + 8.0],
            egui::Label::new(egui::RichText::new(label).font(font.clone()).color(colors::TEXT_PRIMARY)),
        );

        let track_width = (ui.available_width() - config.value_width - ui.spacing().item_spacing.x).max(40.0);
        let (rect, _response) = ui.allocate_exact_size(
            egui::vec2(track_width, config.track_height),
            egui::Sense::hover(),
        );
        let rounding = egui::Rounding::same(config.rounding);

        ui.painter().rect_filled(rect, rounding, colors::BAR_TRACK);
        if percentage > 0 {
            let filled_rect = egui::Rect::from_min_size(
                rect.min,
                egui::vec2(fill_width(rect.width(), percentage), rect.height()),
            );
            ui.painter().rect_filled(filled_rect, rounding, colors::BAR_FILL);
        }

        ui.add_sized(
            [config.value_width, config.track_height + 8.0],
            egui::Label::new(
                egui::RichText::new(format!("{}%", percentage))
                    .font(font)
                    .color(colors::TEXT_SECONDARY)
                    .strong(),
            ),
        );
    });
}
