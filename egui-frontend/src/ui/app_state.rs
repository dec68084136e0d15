//! # App State Module
//!
//! This module defines the central application state and the operations every
//! view funnels its interactions through.
//!
//! ## Key Types:
//! - `SensoryJournalApp` - Main application state struct
//!
//! ## Key Functions:
//! - `select_tab()` / `select_child()` - Selection changes from the header and tabs
//! - `apply_form_update()` - Merge one typed field change into the form
//! - `handle_video_change()` - Acquire or clear the clip preview
//! - `try_submit_entry()` - Required-field check, then `handle_submit_entry()`
//!
//! ## State Management:
//! All mutable state sits in one struct made of smaller state containers. Views
//! read it while drawing and report changes back through the methods here, so
//! each interaction is fully applied before the next frame is drawn.

use std::path::PathBuf;

use log::{info, warn};
use shared::{ChildId, FormUpdate};

use crate::ui::state::{CoreAppState, JournalState, MainTab, UIState};

/// Message shown once an entry has been saved
pub const SUBMIT_ACKNOWLEDGEMENT: &str =
    "Entry saved. In the real system, this is where ML analysis runs.";

/// Main application struct for the egui sensory journal
#[derive(Debug, Default)]
pub struct SensoryJournalApp {
    /// Tab and child selection
    pub core: CoreAppState,

    /// Entries, form and clip preview
    pub journal: JournalState,

    /// Acknowledgement and validation feedback
    pub ui: UIState,
}

impl SensoryJournalApp {
    /// Create the app with seed entries and default selections
    pub fn new() -> Self {
        info!("🚀 Initializing SensoryJournalApp");
        Self {
            core: CoreAppState::new(),
            journal: JournalState::new(),
            ui: UIState::new(),
        }
    }

    pub fn select_tab(&mut self, tab: MainTab) {
        if self.core.current_tab != tab {
            info!("📑 Switched to tab: {:?}", tab);
        }
        self.core.current_tab = tab;
    }

    pub fn select_child(&mut self, child_id: ChildId) {
        if self.core.selected_child != child_id {
            info!("👤 Selected child profile {}", child_id);
        }
        self.core.selected_child = child_id;
    }

    /// Merge a single field change into the form
    pub fn apply_form_update(&mut self, update: FormUpdate) {
        self.journal.form.apply(update);
        self.ui.clear_validation();
    }

    /// React to the file picker. `None` means nothing was selected.
    pub fn handle_video_change(&mut self, file: Option<PathBuf>) {
        if file.is_none() {
            info!("🎬 Clip selection cleared");
        }
        self.journal.set_video(file.as_deref());
    }

    /// Open the native picker and hand the result to `handle_video_change`
    pub fn open_video_picker(&mut self) {
        info!("📁 Opening native video picker");

        let picked = rfd::FileDialog::new()
            .set_title("Upload short clip")
            .add_filter("Video", &["mp4", "mov", "m4v", "webm", "mkv", "avi"])
            .pick_file();

        self.handle_video_change(picked);
    }

    /// Submit if every required field is filled, otherwise show the hint.
    ///
    /// Returns true when an entry was saved.
    pub fn try_submit_entry(&mut self) -> bool {
        if let Some(field) = self.journal.form.first_missing_required() {
            warn!("⚠️ Entry not saved, required field missing: {}", field.label());
            self.ui.set_missing_field(field);
            return false;
        }

        self.handle_submit_entry();
        true
    }

    /// Save the form as a new entry, reset the form and acknowledge.
    pub fn handle_submit_entry(&mut self) {
        let child_id = self.core.selected_child;
        let entry = self.journal.submit_entry(child_id);
        info!(
            "📝 Saved entry {} for child {} (stress {})",
            entry.id,
            entry.child_id,
            entry.stress_level.value()
        );

        self.ui.clear_validation();
        self.ui.show_acknowledgement(SUBMIT_ACKNOWLEDGEMENT);
    }
}
