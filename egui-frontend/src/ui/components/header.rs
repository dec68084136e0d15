//! # Header Module
//!
//! This module renders the application header and footer.
//!
//! ## Key Functions:
//! - `render_header()` - Title, subtitle and the child profile selector
//! - `render_child_selector()` - Dropdown over the fixed child profiles
//! - `render_footer()` - Demo disclaimer
//!
//! ## Purpose:
//! The child selector only changes which child new entries are attributed to.
//! The timeline and the patterns view do not react to it.

use eframe::egui;
use shared::CHILD_PROFILES;

use crate::ui::app_state::SensoryJournalApp;
use crate::ui::components::theme::colors;

const APP_TITLE: &str = "Sensory Trigger Journal (Video-Assisted)";
const APP_SUBTITLE: &str =
    "Privacy-preserving, caregiver-in-the-loop tool for spotting sensory patterns over time.";
const FOOTER_TEXT: &str =
    "Demo: no real video is uploaded, analytics are simulated for explanation.";

impl SensoryJournalApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(APP_TITLE)
                            .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_HEADING)
                            .strong(),
                    )
                    .selectable(false),
                );
                ui.label(egui::RichText::new(APP_SUBTITLE).color(colors::TEXT_SECONDARY));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.render_child_selector(ui);
            });
        });
        ui.add_space(8.0);
    }

    /// Render the child profile dropdown
    pub fn render_child_selector(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.core.selected_child;

        egui::ComboBox::from_id_source("child_profile_select")
            .selected_text(selected.profile().label())
            .width(160.0)
            .show_ui(ui, |ui| {
                for profile in CHILD_PROFILES.iter() {
                    ui.selectable_value(&mut selected, profile.id, profile.label());
                }
            });

        // Right-to-left layout: the label ends up left of the dropdown
        ui.label(egui::RichText::new("Child profile").color(colors::TEXT_SECONDARY));

        if selected != self.core.selected_child {
            self.select_child(selected);
        }
    }

    /// Render the footer disclaimer
    pub fn render_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(FOOTER_TEXT)
                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(4.0);
        });
    }
}
