//! Transient notification stack.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::util::notify::Severity;

/// Most toasts kept on screen at once; older ones are dropped first.
pub const TOAST_STACK_CAP: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: &str, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        if self.toasts.len() >= TOAST_STACK_CAP {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast { id, message: message.to_owned(), severity });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
