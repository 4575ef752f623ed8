//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render admin panels from shared state provided by the pages and
//! hand user actions to `services`, which own all network and host access.

pub mod chat_panel;
pub mod games_table;
pub mod image_panel;
pub mod log_viewer;
pub mod query_panel;
pub mod status_panel;
pub mod toast_stack;
pub mod user_table;
