//! # UI Components Module
//!
//! This module organizes all UI components for the sensory journal.
//!
//! ## Module Organization:
//! - `acknowledgement_modal` - Blocking "entry saved" confirmation
//! - `bar` - Labeled percentage bar
//! - `entry_timeline` - Reverse-chronological entry feed
//! - `header` - Title, child selector and footer
//! - `journal_form` - New entry form with clip preview
//! - `patterns_view` - Simulated analytics cards
//! - `styling` - Global style and card helpers
//! - `tab_manager` - Tab buttons and content routing
//! - `theme` - Colour configuration
//!
//! Views that need app state are `impl SensoryJournalApp` blocks; leaf widgets
//! are free functions.

pub mod acknowledgement_modal;
pub mod bar;
pub mod entry_timeline;
pub mod header;
pub mod journal_form;
pub mod patterns_view;
pub mod styling;
pub mod tab_manager;
pub mod theme;

pub use styling::setup_journal_style;
