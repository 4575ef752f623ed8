//! Route-level screens.

pub mod assistant;
pub mod users;
