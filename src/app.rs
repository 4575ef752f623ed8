//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::config::ClientConfig;
use crate::pages::{assistant::AssistantPage, users::UsersPage};
use crate::state::toast::ToastState;
use crate::util::notify::ToastNotifier;

/// Root application component.
///
/// Loads the page bootstrap once and provides it, the toast stack, and the
/// notifier to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    log::debug!("admin console config loaded ({} users, {} games)", config.users.len(), config.games.len());
    provide_context(config);

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);
    provide_context(ToastNotifier::new(toasts));

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("admin"), StaticSegment("assistant")) view=AssistantPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=UsersPage/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}
