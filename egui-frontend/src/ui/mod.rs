pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod state;

pub use app_state::SensoryJournalApp;
pub use components::setup_journal_style;
