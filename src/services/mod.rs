//! One service per user action group.
//!
//! Each service owns its endpoint client plus the host capabilities it needs
//! (notifier, confirm, timer, storage, downloader) and mutates view state
//! through [`crate::state::StateHandle`]. Components build the browser
//! flavour; tests build one from the recording fakes.

pub mod assistant;
pub mod chat;
pub mod image;
pub mod users;
