//! # Styling Module
//!
//! Global egui style plus the small drawing helpers shared by every card.
//!
//! ## Key Functions:
//! - `setup_journal_style()` - Configure global egui styling once at startup
//! - `card_frame()` - White rounded container used by all cards
//! - `card_heading()` - Card title with a muted subtitle
//! - `chip()` - Rounded coloured label used for tags, pills and stress chips

use eframe::egui;

use crate::ui::components::theme::colors;

/// Configure fonts, spacing and colours for the whole app
pub fn setup_journal_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = colors::APP_BACKGROUND;
        style.visuals.window_fill = colors::CARD_BACKGROUND;
        // Text edits draw on extreme_bg_color in egui 0.28
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(248, 250, 252);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(22.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// White card container with a subtle border
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(16.0))
}

/// Card title followed by a muted one-line description
pub fn card_heading(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.label(
        egui::RichText::new(title)
            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_HEADING)
            .strong(),
    );
    ui.label(
        egui::RichText::new(subtitle)
            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_SECONDARY),
    );
    ui.add_space(8.0);
}

/// Small caption under a form field
pub fn field_hint(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_SECONDARY),
    );
}

/// Rounded coloured label
pub fn chip(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>, fill: egui::Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.add(egui::Label::new(text).selectable(false));
        });
}
