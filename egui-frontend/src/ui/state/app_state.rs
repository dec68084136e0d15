//! # Core Application State
//!
//! Selection state that decides what the rest of the UI shows: the active tab
//! and the active child profile.

use shared::ChildId;

/// Tabs available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainTab {
    #[default]
    Journal,
    Patterns,
}

impl MainTab {
    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Journal => "Journal entry",
            MainTab::Patterns => "Patterns & insights",
        }
    }
}

/// Core application state containing the current selections
#[derive(Debug, Default)]
pub struct CoreAppState {
    /// Currently active main tab (Journal or Patterns)
    pub current_tab: MainTab,

    /// Child that new entries are attributed to
    pub selected_child: ChildId,
}

impl CoreAppState {
    pub fn new() -> Self {
        Self::default()
    }
}
