//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (dialogs, timers,
//! downloads, notifications) behind small traits so services stay testable.

pub mod confirm;
pub mod download;
pub mod markup;
pub mod notify;
pub mod timer;
