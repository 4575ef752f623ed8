//! Image generation panel state.

use crate::net::types::GeneratedImage;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ImageView {
    #[default]
    Idle,
    /// Waiting for the server; the prompt is echoed back to the user.
    Loading { prompt: String },
    Ready(GeneratedImage),
    /// Failure block, still echoing the prompt for context.
    Failed { prompt: String, message: String },
}

impl ImageView {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}
