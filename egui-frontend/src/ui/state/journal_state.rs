//! # Journal State Module
//!
//! Entries, the new-entry form and the currently selected clip.
//!
//! ## Responsibilities:
//! - Session entry list (seeded, newest first, append-only)
//! - Form field state and its reset after submission
//! - Preview reference for the selected video clip
//!
//! ## Purpose:
//! Everything the journal form and timeline read lives here, so the submit
//! transition can be tested without a running egui context.

use std::path::Path;

use shared::{seed_entries, ChildId, FormState, JournalEntry};

use super::media_preview::{PreviewReference, PreviewStore};

#[derive(Debug)]
pub struct JournalState {
    /// All entries for every child, newest first
    pub entries: Vec<JournalEntry>,

    /// Current form input
    pub form: FormState,

    /// Clip picked for the entry being written, if any
    pub video_preview: Option<PreviewReference>,

    previews: PreviewStore,
}

impl JournalState {
    /// Create journal state holding the seed entries and an empty form
    pub fn new() -> Self {
        Self {
            entries: seed_entries(),
            form: FormState::default(),
            video_preview: None,
            previews: PreviewStore::new(),
        }
    }

    /// Replace the clip preview. `None` clears it.
    ///
    /// Any previous reference is released when it is overwritten.
    pub fn set_video(&mut self, file: Option<&Path>) {
        self.video_preview = file.map(|path| self.previews.acquire(path));
    }

    /// Turn the current form into a new entry at the top of the list.
    ///
    /// The form is reset and the clip preview released afterwards.
    pub fn submit_entry(&mut self, child_id: ChildId) -> &JournalEntry {
        let id = self.entries.len() + 1;
        let entry = JournalEntry::from_form(id, child_id, &self.form);

        self.entries.insert(0, entry);
        self.form = FormState::default();
        self.video_preview = None;

        &self.entries[0]
    }

    /// Preview references that are still held somewhere
    pub fn live_preview_count(&self) -> usize {
        self.previews.live_count()
    }
}

impl Default for JournalState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{FormUpdate, StressLevel};

    #[test]
    fn test_set_video_replaces_and_releases() {
        let mut journal = JournalState::new();

        journal.set_video(Some(Path::new("first.mp4")));
        let first_url = journal.video_preview.as_ref().unwrap().url().to_string();

        journal.set_video(Some(Path::new("second.mp4")));
        let second_url = journal.video_preview.as_ref().unwrap().url().to_string();

        assert_ne!(first_url, second_url);
        assert_eq!(journal.live_preview_count(), 1);

        journal.set_video(None);
        assert!(journal.video_preview.is_none());
        assert_eq!(journal.live_preview_count(), 0);
    }

    #[test]
    fn test_submit_entry_prepends_with_next_id() {
        let mut journal = JournalState::new();
        journal.form.apply(FormUpdate::Activity("Swimming".to_string()));
        journal.form.apply(FormUpdate::Location("Pool".to_string()));
        journal.form.apply(FormUpdate::StressLevel(StressLevel::new(4).unwrap()));

        let entry = journal.submit_entry(ChildId::Two).clone();

        assert_eq!(entry.id, 3);
        assert_eq!(entry.child_id, ChildId::Two);
        assert_eq!(entry.environment.noise, "High");
        assert_eq!(journal.entries.len(), 3);
        assert_eq!(journal.entries[0], entry);
        assert_eq!(journal.entries[1].time, "Today · 09:15");
    }

    #[test]
    fn test_submit_entry_resets_form_and_preview() {
        let mut journal = JournalState::new();
        journal.form.apply(FormUpdate::Activity("Haircut".to_string()));
        journal.form.apply(FormUpdate::Duration("45".to_string()));
        journal.set_video(Some(Path::new("salon.mov")));

        journal.submit_entry(ChildId::One);

        assert_eq!(journal.form, FormState::default());
        assert!(journal.video_preview.is_none());
        assert_eq!(journal.live_preview_count(), 0);
    }

    #[test]
    fn test_ids_keep_increasing() {
        let mut journal = JournalState::new();
        let ids: Vec<usize> = (0..3).map(|_| journal.submit_entry(ChildId::One).id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
        assert_eq!(journal.entries.first().unwrap().id, 5);
    }
}
