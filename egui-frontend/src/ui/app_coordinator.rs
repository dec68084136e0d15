//! # App Coordinator Module
//!
//! The main update loop: lays out the header, footer, timeline and tab content
//! panels each frame and draws any open modal on top.
//!
//! ## Application Flow:
//! 1. Header panel (title, child selector)
//! 2. Footer panel (demo disclaimer)
//! 3. Right panel with the entry timeline, always visible
//! 4. Central panel with the tab buttons and the active view
//! 5. Modals
//!
//! While the acknowledgement is open every panel is drawn disabled.

use eframe::egui;

use crate::ui::app_state::SensoryJournalApp;

impl eframe::App for SensoryJournalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_frame(ctx);
    }
}

impl SensoryJournalApp {
    /// Draw every panel and modal for one frame
    pub fn render_frame(&mut self, ctx: &egui::Context) {
        let interactive = !self.ui.is_acknowledgement_open();

        egui::TopBottomPanel::top("journal_header").show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                self.render_header(ui);
            });
        });

        egui::TopBottomPanel::bottom("journal_footer").show(ctx, |ui| {
            self.render_footer(ui);
        });

        egui::SidePanel::right("journal_timeline")
            .resizable(true)
            .default_width(380.0)
            .min_width(300.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.add_enabled_ui(interactive, |ui| {
                    self.render_entry_timeline(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                ui.add_space(4.0);
                self.render_tabs(ui);
                ui.add_space(12.0);

                egui::ScrollArea::vertical()
                    .id_source("main_content_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_main_content(ui);
                    });
            });
        });

        self.render_modals(ctx);
    }
}
