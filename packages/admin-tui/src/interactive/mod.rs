//! Interactive provider admin screen
//!
//! - Provider table with sortable columns and row checkboxes
//! - Live search with `/`
//! - Filter panel with draft/apply semantics
//! - Page-number pager with ellipses
//! - Auto-dismissing notifications

mod filters;
mod render;
mod runner;
mod state;
mod types;

pub use runner::run_interactive;
pub use state::App;
