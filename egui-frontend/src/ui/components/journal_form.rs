//! # Journal Form
//!
//! The new-entry form: clip picker with inline preview on the left, context
//! fields on the right.
//!
//! ## Responsibilities:
//! - Report every field edit as a typed `FormUpdate`
//! - Hand clip selection to `handle_video_change()`
//! - Route the save button through the required-field check
//!
//! Widgets edit local copies while drawing; the collected updates and the
//! button action are applied after the card is drawn.

use eframe::egui;
use shared::{FormState, FormUpdate, StressLevel};

use crate::ui::app_state::SensoryJournalApp;
use crate::ui::components::styling::{card_frame, card_heading, field_hint};
use crate::ui::components::theme::colors;
use crate::ui::state::media_preview::PreviewReference;

const CONSENT_TEXT: &str = "I confirm I have consent to capture this clip and understand it is used only for pattern analysis, not diagnosis.";

/// Buttons in the form that do more than edit a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JournalAction {
    PickVideo,
    ClearVideo,
    Submit,
}

impl SensoryJournalApp {
    /// Render the entry form card
    pub fn render_journal_view(&mut self, ui: &mut egui::Ui) {
        let mut updates: Vec<FormUpdate> = Vec::new();
        let mut action: Option<JournalAction> = None;

        card_frame().show(ui, |ui| {
            card_heading(
                ui,
                "New video-assisted entry",
                "30–90s clip + quick context. AI looks for recurring sensory patterns; you stay in control.",
            );

            ui.columns(2, |columns| {
                render_clip_section(&mut columns[0], self.journal.video_preview.as_ref(), &mut action);
                render_context_fields(
                    &mut columns[1],
                    &self.journal.form,
                    self.ui.validation_message.as_deref(),
                    &mut updates,
                    &mut action,
                );
            });
        });

        for update in updates {
            self.apply_form_update(update);
        }

        match action {
            Some(JournalAction::PickVideo) => self.open_video_picker(),
            Some(JournalAction::ClearVideo) => self.handle_video_change(None),
            Some(JournalAction::Submit) => {
                self.try_submit_entry();
            }
            None => {}
        }
    }
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).color(colors::TEXT_PRIMARY).strong());
}

fn render_clip_section(
    ui: &mut egui::Ui,
    preview: Option<&PreviewReference>,
    action: &mut Option<JournalAction>,
) {
    field_label(ui, "Upload short clip");
    if ui.button("🎬 Choose video…").clicked() {
        *action = Some(JournalAction::PickVideo);
    }
    field_hint(ui, "Faces are not analysed; only motion + environment features.");

    if let Some(preview) = preview {
        ui.add_space(8.0);
        render_video_preview(ui, preview);
        if ui.small_button("Remove clip").clicked() {
            *action = Some(JournalAction::ClearVideo);
        }
    }
}

/// Inline preview panel for the selected clip
fn render_video_preview(ui: &mut egui::Ui, preview: &PreviewReference) {
    egui::Frame::none()
        .fill(colors::PREVIEW_BACKGROUND)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_min_height(120.0);
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new("▶")
                        .font(egui::FontId::new(32.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_WHITE),
                );
                ui.label(egui::RichText::new(preview.file_name()).color(colors::TEXT_WHITE).strong());
                ui.label(
                    egui::RichText::new(format!("{} · muted preview", preview.size_label()))
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .color(colors::BUTTON_BORDER),
                );
            });
        })
        .response
        .on_hover_text(preview.path().display().to_string());

    field_hint(ui, preview.url());
}

fn render_context_fields(
    ui: &mut egui::Ui,
    form: &FormState,
    validation_message: Option<&str>,
    updates: &mut Vec<FormUpdate>,
    action: &mut Option<JournalAction>,
) {
    field_label(ui, "Activity");
    let mut activity = form.activity.clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut activity)
                .hint_text("e.g. Grocery shopping, classroom, playground")
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        updates.push(FormUpdate::Activity(activity));
    }

    field_label(ui, "Location");
    let mut location = form.location.clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut location)
                .hint_text("Home, school, supermarket...")
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        updates.push(FormUpdate::Location(location));
    }

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            field_label(ui, "Observed stress level");
            let mut stress_level = form.stress_level;
            egui::ComboBox::from_id_source("stress_level_select")
                .selected_text(stress_level.option_label())
                .width(190.0)
                .show_ui(ui, |ui| {
                    for level in StressLevel::ALL {
                        ui.selectable_value(&mut stress_level, level, level.option_label());
                    }
                });
            if stress_level != form.stress_level {
                updates.push(FormUpdate::StressLevel(stress_level));
            }
        });

        ui.vertical(|ui| {
            field_label(ui, "Duration (minutes)");
            let mut duration = form.duration.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut duration).hint_text("1").desired_width(80.0))
                .changed()
            {
                // Numeric input: keep digits only
                let digits: String = duration.chars().filter(|c| c.is_ascii_digit()).collect();
                updates.push(FormUpdate::Duration(digits));
            }
        });
    });

    field_label(ui, "Notes (optional)");
    let mut notes = form.notes.clone();
    if ui
        .add(
            egui::TextEdit::multiline(&mut notes)
                .hint_text("What did you notice? Sounds, lights, crowd, child's response...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        updates.push(FormUpdate::Notes(notes));
    }

    let mut consent_given = form.consent_given;
    if ui.checkbox(&mut consent_given, CONSENT_TEXT).changed() {
        updates.push(FormUpdate::ConsentGiven(consent_given));
    }

    if let Some(message) = validation_message {
        ui.label(egui::RichText::new(format!("⚠ {}", message)).color(colors::TEXT_ERROR));
    }

    ui.add_space(6.0);
    let submit_button = egui::Button::new(
        egui::RichText::new("Save entry & simulate analysis")
            .color(colors::TEXT_WHITE)
            .strong(),
    )
    .fill(colors::ACTIVE_BACKGROUND)
    .rounding(egui::Rounding::same(8.0))
    .min_size(egui::vec2(220.0, 36.0));

    if ui.add(submit_button).clicked() {
        *action = Some(JournalAction::Submit);
    }
}
