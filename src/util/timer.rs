//! Delays for staged UI transitions, and render-time clock labels.

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, ms: u32);
}

/// `setTimeout`-backed timer. Completes immediately outside a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, ms: u32) {
        #[cfg(feature = "csr")]
        gloo_timers::future::TimeoutFuture::new(ms).await;
        #[cfg(not(feature = "csr"))]
        let _ = ms;
    }
}

/// Local wall-clock time (`HH:MM`) for stamping rendered chat messages.
pub fn now_label() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
