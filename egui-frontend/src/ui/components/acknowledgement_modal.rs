//! # Acknowledgement Modal
//!
//! Blocking confirmation shown after an entry is saved. While it is open the
//! backdrop swallows pointer input and the panels are drawn disabled, so the
//! caregiver has to dismiss it (OK button or Enter) before doing anything else.
//! Enter is ignored on the frame the modal opens, since that press may be the
//! one that activated the focused save button.

use eframe::egui;

use crate::ui::app_state::SensoryJournalApp;
use crate::ui::components::theme::colors;

impl SensoryJournalApp {
    /// Render all modals - main modal coordinator
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_acknowledgement_modal(ctx);
    }

    fn render_acknowledgement_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.ui.acknowledgement.clone() else {
            return;
        };

        let mut dismissed = self.ui.accepts_keyboard_dismiss()
            && ctx.input(|i| i.key_pressed(egui::Key::Enter));

        egui::Area::new(egui::Id::new("submit_acknowledgement_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();

                // Backdrop first, so the OK button added later wins the hit test
                ui.allocate_rect(screen_rect, egui::Sense::click());
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(ui.style())
                            .fill(colors::CARD_BACKGROUND)
                            .stroke(egui::Stroke::new(2.0, colors::ACTIVE_BACKGROUND))
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::vec2(420.0, 150.0));
                                ui.set_max_size(egui::vec2(420.0, 150.0));

                                ui.vertical_centered(|ui| {
                                    ui.add_space(10.0);
                                    ui.label(
                                        egui::RichText::new(&message)
                                            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                                            .color(colors::TEXT_PRIMARY),
                                    );
                                    ui.add_space(20.0);

                                    let ok_button = egui::Button::new(
                                        egui::RichText::new("OK").color(colors::TEXT_WHITE).strong(),
                                    )
                                    .fill(colors::ACTIVE_BACKGROUND)
                                    .rounding(egui::Rounding::same(8.0))
                                    .min_size(egui::vec2(100.0, 32.0));

                                    if ui.add(ok_button).clicked() {
                                        dismissed = true;
                                    }
                                });
                            });
                    });
                });
            });

        if dismissed {
            log::info!("✅ Acknowledgement dismissed");
            self.ui.dismiss_acknowledgement();
        } else {
            self.ui.mark_acknowledgement_drawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app_state::SUBMIT_ACKNOWLEDGEMENT;
    use shared::FormUpdate;

    fn input_with(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1280.0, 800.0),
            )),
            events,
            ..Default::default()
        }
    }

    fn enter_pressed() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn fill_required(app: &mut SensoryJournalApp) {
        app.apply_form_update(FormUpdate::Activity("Swimming lesson".to_string()));
        app.apply_form_update(FormUpdate::Location("Leisure centre".to_string()));
        app.apply_form_update(FormUpdate::ConsentGiven(true));
    }

    #[test]
    fn test_enter_that_submits_does_not_dismiss() {
        let ctx = egui::Context::default();
        let mut app = SensoryJournalApp::new();
        fill_required(&mut app);

        // Same frame: the Enter press activates save, then the modal is drawn
        let _ = ctx.run(input_with(vec![enter_pressed()]), |ctx| {
            assert!(app.try_submit_entry());
            app.render_modals(ctx);
        });

        assert_eq!(app.journal.entries.len(), 3);
        assert_eq!(app.ui.acknowledgement.as_deref(), Some(SUBMIT_ACKNOWLEDGEMENT));

        // A later Enter press dismisses it
        let _ = ctx.run(input_with(vec![enter_pressed()]), |ctx| {
            app.render_modals(ctx);
        });
        assert!(!app.ui.is_acknowledgement_open());
    }

    #[test]
    fn test_modal_stays_open_without_input() {
        let ctx = egui::Context::default();
        let mut app = SensoryJournalApp::new();
        fill_required(&mut app);
        app.try_submit_entry();

        for _ in 0..5 {
            let _ = ctx.run(input_with(Vec::new()), |ctx| app.render_frame(ctx));
            assert!(app.ui.is_acknowledgement_open());
        }

        let _ = ctx.run(input_with(vec![enter_pressed()]), |ctx| app.render_frame(ctx));
        assert!(!app.ui.is_acknowledgement_open());
    }

    #[test]
    fn test_backdrop_click_keeps_modal_and_data() {
        let ctx = egui::Context::default();
        let mut app = SensoryJournalApp::new();
        fill_required(&mut app);
        app.try_submit_entry();
        app.apply_form_update(FormUpdate::Activity("Half typed".to_string()));
        let entries_before = app.journal.entries.clone();
        let form_before = app.journal.form.clone();
        let corner = egui::pos2(6.0, 6.0);

        let frames = vec![
            vec![egui::Event::PointerMoved(corner)],
            vec![egui::Event::PointerButton {
                pos: corner,
                button: egui::PointerButton::Primary,
                pressed: true,
                modifiers: egui::Modifiers::NONE,
            }],
            vec![egui::Event::PointerButton {
                pos: corner,
                button: egui::PointerButton::Primary,
                pressed: false,
                modifiers: egui::Modifiers::NONE,
            }],
            Vec::new(),
        ];
        for events in frames {
            let _ = ctx.run(input_with(events), |ctx| app.render_frame(ctx));
        }

        assert!(app.ui.is_acknowledgement_open());
        assert_eq!(app.journal.entries, entries_before);
        assert_eq!(app.journal.form, form_before);
    }

    #[test]
    fn test_no_modal_without_acknowledgement() {
        let ctx = egui::Context::default();
        let mut app = SensoryJournalApp::new();

        let _ = ctx.run(input_with(vec![enter_pressed()]), |ctx| app.render_frame(ctx));

        assert!(!app.ui.is_acknowledgement_open());
        assert!(!app.ui.accepts_keyboard_dismiss());
        assert_eq!(app.journal.entries.len(), 2);
    }
}
