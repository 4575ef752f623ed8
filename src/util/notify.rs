//! User notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Services report outcomes through the [`Notifier`] capability supplied by
//! the host. The app provides [`ToastNotifier`], which feeds the toast stack
//! rendered by `components::toast_stack`.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// CSS modifier for the toast element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Shows a short message to the user.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Notifier backed by the shared toast signal.
#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let mut id = 0;
        self.toasts.update(|t| id = t.push(message, severity));
        log::info!("notify[{}]: {message}", severity.as_str());

        #[cfg(feature = "csr")]
        {
            let toasts = self.toasts;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                toasts.update(|t| t.dismiss(id));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}
