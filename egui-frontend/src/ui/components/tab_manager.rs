//! # Tab Manager Module
//!
//! Tab toggle buttons and the content routing behind them.
//!
//! ## Tab Flow:
//! - MainTab::Journal -> New entry form
//! - MainTab::Patterns -> Simulated patterns and insights
//!
//! Switching tabs only changes `core.current_tab`; entries, form input and the
//! selected child are left as they are.

use eframe::egui;

use crate::ui::app_state::SensoryJournalApp;
use crate::ui::components::theme::colors;
use crate::ui::state::MainTab;

impl SensoryJournalApp {
    /// Draw the two mutually exclusive tab buttons
    pub fn render_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in [MainTab::Journal, MainTab::Patterns] {
                let is_active = self.core.current_tab == tab;

                let button = egui::Button::new(
                    egui::RichText::new(tab.label())
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .color(if is_active {
                            colors::TEXT_WHITE
                        } else {
                            colors::TEXT_SECONDARY
                        }),
                )
                .min_size(egui::vec2(150.0, 32.0))
                .rounding(egui::Rounding::same(6.0))
                .fill(if is_active {
                    colors::ACTIVE_BACKGROUND
                } else {
                    colors::INACTIVE_BACKGROUND
                })
                .stroke(egui::Stroke::new(1.0, colors::BUTTON_BORDER));

                if ui.add(button).clicked() {
                    self.select_tab(tab);
                }
            }
        });
    }

    /// Render the view for the selected tab
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        match self.core.current_tab {
            MainTab::Journal => self.render_journal_view(ui),
            MainTab::Patterns => self.render_patterns_view(ui),
        }
    }
}
