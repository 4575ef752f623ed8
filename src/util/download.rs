//! Client-side save of generated images.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Longest prompt prefix kept in a download filename.
pub const FILENAME_PREFIX_LEN: usize = 30;

/// Saves a URL to disk under a suggested filename.
pub trait Downloader {
    fn save(&self, url: &str, filename: &str);
}

/// Derive a download filename from the prompt that generated the image.
///
/// Non-alphanumeric characters become `_` and the prompt part is cut to
/// [`FILENAME_PREFIX_LEN`] characters.
#[must_use]
pub fn image_filename(prompt: &str) -> String {
    let slug: String = prompt
        .chars()
        .take(FILENAME_PREFIX_LEN)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("ai-image-{slug}.png")
}

/// Temporary-anchor download in the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownloader;

impl Downloader for BrowserDownloader {
    fn save(&self, url: &str, filename: &str) {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Ok(anchor) = document.create_element("a") else {
                return;
            };
            let _ = anchor.set_attribute("href", url);
            let _ = anchor.set_attribute("download", filename);
            let Some(body) = document.body() else {
                return;
            };
            let _ = body.append_child(&anchor);
            if let Some(el) = anchor.dyn_ref::<web_sys::HtmlElement>() {
                el.click();
            }
            anchor.remove();
            log::debug!("download started: {filename}");
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, filename);
        }
    }
}
