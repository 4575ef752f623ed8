//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by component (`chat`, `assistant`, `image`, `users`,
//! `toast`) so each view depends on one small model. Services mutate state
//! through [`StateHandle`], implemented for Leptos signals in the app and for
//! `Rc<RefCell<_>>` in tests.

pub mod assistant;
pub mod chat;
pub mod image;
pub mod toast;
pub mod users;

use std::cell::RefCell;
use std::rc::Rc;

/// Read/write access to one piece of view state.
pub trait StateHandle<T> {
    fn update(&self, f: impl FnOnce(&mut T));
    fn snapshot(&self) -> T;
}

impl<T: Clone + Send + Sync + 'static> StateHandle<T> for leptos::prelude::RwSignal<T> {
    fn update(&self, f: impl FnOnce(&mut T)) {
        leptos::prelude::Update::update(self, f);
    }

    fn snapshot(&self) -> T {
        leptos::prelude::GetUntracked::get_untracked(self)
    }
}

impl<T: Clone> StateHandle<T> for Rc<RefCell<T>> {
    fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }

    fn snapshot(&self) -> T {
        self.borrow().clone()
    }
}
