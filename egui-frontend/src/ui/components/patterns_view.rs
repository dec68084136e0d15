//! # Patterns View
//!
//! Simulated analytics: trigger insights, correlation bars and per-child tag
//! panels. Everything shown here comes from the constants in `shared`; nothing
//! is computed from the journal entries or the selected child.

use eframe::egui;
use shared::{pattern_insights, SensoryProfile, CORRELATIONS, SENSORY_PROFILES};

use crate::ui::app_state::SensoryJournalApp;
use crate::ui::components::bar::render_bar;
use crate::ui::components::styling::{card_frame, card_heading, chip};
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl SensoryJournalApp {
    /// Render the three patterns cards
    pub fn render_patterns_view(&self, ui: &mut egui::Ui) {
        render_insights_card(ui);
        ui.add_space(12.0);
        render_correlations_card(ui);
        ui.add_space(12.0);
        render_profiles_card(ui);
    }
}

fn render_insights_card(ui: &mut egui::Ui) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        card_heading(
            ui,
            "Top sensory trigger patterns",
            "These insights are computed from anonymised features, not from facial identity.",
        );

        for insight in pattern_insights() {
            ui.horizontal_wrapped(|ui| {
                chip(
                    ui,
                    egui::RichText::new(insight.kind.label())
                        .color(colors::TEXT_WHITE)
                        .strong(),
                    CURRENT_THEME.insight_color(insight.kind),
                );
                ui.label(egui::RichText::new(insight.headline).color(colors::TEXT_PRIMARY).strong());
                ui.label(egui::RichText::new(&insight.detail).color(colors::TEXT_PRIMARY));
            });
            ui.add_space(4.0);
        }
    });
}

fn render_correlations_card(ui: &mut egui::Ui) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        card_heading(
            ui,
            "Explainable correlations",
            "Simple, transparent metrics you can discuss with clinicians and educators.",
        );

        for metric in CORRELATIONS.iter() {
            render_bar(ui, metric.label, metric.value);
        }
    });
}

fn render_profiles_card(ui: &mut egui::Ui) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        card_heading(
            ui,
            "Per-child sensory profile (demo)",
            "Designed to support individualised support plans, not labels or diagnoses.",
        );

        for profile in SENSORY_PROFILES.iter() {
            render_profile_tags(ui, profile);
            ui.add_space(6.0);
        }
    });
}

fn render_profile_tags(ui: &mut egui::Ui, profile: &SensoryProfile) {
    ui.label(egui::RichText::new(profile.label).color(colors::TEXT_HEADING).strong());
    ui.horizontal_wrapped(|ui| {
        for tag in profile.tags {
            let (background, text_color) = CURRENT_THEME.tag_colors(tag.tone);
            chip(ui, egui::RichText::new(tag.text).color(text_color), background);
        }
    });
}
