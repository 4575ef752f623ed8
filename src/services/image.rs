//! Image generation and client-side download.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use crate::config::ClientConfig;
use crate::net::api::AssistantApi;
use crate::net::transport::Transport;
use crate::net::types::{GeneratedImage, ImageRequest};
use crate::state::StateHandle;
use crate::state::image::ImageView;
use crate::util::download::{Downloader, image_filename};

pub struct ImageService<T, D> {
    api: AssistantApi<T>,
    downloader: D,
    width: u32,
    height: u32,
}

impl<T: Transport, D: Downloader> ImageService<T, D> {
    pub fn new(transport: T, downloader: D, config: &ClientConfig) -> Self {
        Self {
            api: AssistantApi::new(transport, config.endpoints.clone()),
            downloader,
            width: config.image_width,
            height: config.image_height,
        }
    }

    /// Generate an image for `prompt`. Blank prompts and requests made while
    /// one is loading are ignored; returns whether a request was issued.
    pub async fn generate(&self, state: &impl StateHandle<ImageView>, prompt: &str) -> bool {
        let prompt = prompt.trim();
        if prompt.is_empty() || state.snapshot().is_loading() {
            return false;
        }
        state.update(|v| *v = ImageView::Loading { prompt: prompt.to_owned() });

        let request = ImageRequest { prompt: prompt.to_owned(), width: self.width, height: self.height };
        let view = match self.api.generate_image(&request).await {
            Ok(image) => {
                log::debug!("image generated for prompt of {} chars", prompt.len());
                ImageView::Ready(image)
            }
            Err(e) => {
                log::warn!("image generation failed: {e}");
                ImageView::Failed { prompt: prompt.to_owned(), message: e.user_message() }
            }
        };
        state.update(|v| *v = view);
        true
    }

    pub fn download(&self, image: &GeneratedImage) {
        self.downloader.save(&image.image_url, &image_filename(&image.prompt));
    }
}

#[cfg(feature = "csr")]
impl ImageService<crate::net::transport::BrowserTransport, crate::util::download::BrowserDownloader> {
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(crate::net::transport::BrowserTransport, crate::util::download::BrowserDownloader, config)
    }
}
