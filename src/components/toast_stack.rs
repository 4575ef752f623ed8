//! Transient notification stack fed by `ToastNotifier`.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast toast--{}", toast.severity.as_str());
                        view! {
                            <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
