//! # Entry Timeline
//!
//! Vertical feed of every journal entry in stored order (newest first). The feed
//! shows all children; it is not filtered by the selected profile.

use eframe::egui;
use shared::JournalEntry;

use crate::ui::app_state::SensoryJournalApp;
use crate::ui::components::styling::{card_frame, card_heading, chip};
use crate::ui::components::theme::{colors, CURRENT_THEME};

const MARKER_RADIUS: f32 = 6.0;

impl SensoryJournalApp {
    /// Render the "Recent entries" card
    pub fn render_entry_timeline(&self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            card_heading(
                ui,
                "Recent entries",
                "Each dot is a caregiver-labelled moment; AI adds environmental context on top.",
            );

            egui::ScrollArea::vertical()
                .id_source("entry_timeline_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for entry in &self.journal.entries {
                        render_timeline_item(ui, entry);
                        ui.separator();
                    }
                });
        });
    }
}

fn render_timeline_item(ui: &mut egui::Ui, entry: &JournalEntry) {
    let severity = CURRENT_THEME.stress_color(entry.stress_level);

    ui.horizontal_top(|ui| {
        let (marker_rect, _response) = ui.allocate_exact_size(
            egui::vec2(MARKER_RADIUS * 2.0, MARKER_RADIUS * 2.0 + 6.0),
            egui::Sense::hover(),
        );
        ui.painter().circle_filled(
            egui::pos2(marker_rect.center().x, marker_rect.min.y + MARKER_RADIUS + 4.0),
            MARKER_RADIUS,
            severity,
        );

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&entry.time).color(colors::TEXT_SECONDARY));
                chip(
                    ui,
                    egui::RichText::new(entry.stress_level.chip_label())
                        .color(colors::TEXT_WHITE)
                        .strong(),
                    severity,
                );
            });

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                ui.label(egui::RichText::new(&entry.activity).color(colors::TEXT_PRIMARY).strong());
                ui.label(egui::RichText::new(format!("· {}", entry.location)).color(colors::TEXT_PRIMARY));
            });

            ui.horizontal_wrapped(|ui| {
                environment_tag(ui, "Noise", &entry.environment.noise);
                environment_tag(ui, "Light", &entry.environment.brightness);
                environment_tag(ui, "Crowd", &entry.environment.crowd);
            });

            ui.label(egui::RichText::new(&entry.notes).color(colors::TEXT_PRIMARY));
        });
    });
}

fn environment_tag(ui: &mut egui::Ui, name: &str, value: &str) {
    let mut job = egui::text::LayoutJob::default();
    job.append(
        &format!("{}: ", name),
        0.0,
        egui::TextFormat {
            color: colors::TEXT_SECONDARY,
            ..Default::default()
        },
    );
    job.append(
        value,
        0.0,
        egui::TextFormat {
            color: colors::TEXT_HEADING,
            ..Default::default()
        },
    );
    chip(ui, job, colors::TAG_NEUTRAL);
}
