//! # State Module
//!
//! State containers composed by `SensoryJournalApp`.
//!
//! ## Module Organization:
//! - `app_state` - Active tab and active child
//! - `journal_state` - Entries, form input and clip preview
//! - `media_preview` - Scoped references to locally picked video files
//! - `ui_state` - Acknowledgement and validation feedback

pub mod app_state;
pub mod journal_state;
pub mod media_preview;
pub mod ui_state;

pub use app_state::{CoreAppState, MainTab};
pub use journal_state::JournalState;
pub use ui_state::UIState;
