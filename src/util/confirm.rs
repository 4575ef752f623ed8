//! Interactive confirmation before destructive actions.

/// Asks the user a yes/no question and blocks for the answer.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// `window.confirm` dialog. Answers "no" outside a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(prompt).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = prompt;
            false
        }
    }
}
