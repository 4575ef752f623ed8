//! Assistant connectivity snapshot with refresh and connection-test controls.

use leptos::prelude::*;

use crate::state::assistant::{AssistantState, StatusView, api_key_label};

#[component]
pub fn StatusPanel() -> impl IntoView {
    #[cfg(feature = "csr")]
    let config = StoredValue::new(expect_context::<crate::config::ClientConfig>());
    #[cfg(feature = "csr")]
    let notifier = expect_context::<crate::util::notify::ToastNotifier>();
    let state = expect_context::<RwSignal<AssistantState>>();

    let refresh = move || {
        #[cfg(feature = "csr")]
        {
            let service = config.with_value(|c| crate::services::assistant::StatusService::browser(c, notifier));
            leptos::task::spawn_local(async move {
                service.refresh_status(&state).await;
            });
        }
    };
    refresh();

    let on_test = move |_| {
        #[cfg(feature = "csr")]
        {
            let service = config.with_value(|c| crate::services::assistant::StatusService::browser(c, notifier));
            leptos::task::spawn_local(async move {
                service.test_connection(&state).await;
            });
        }
    };

    view! {
        <section class="status-panel">
            <div class="status-panel__header">
                <h3>"Assistant Status"</h3>
                <button class="btn" on:click=move |_| refresh()>
                    "Refresh"
                </button>
                <button class="btn btn--primary" on:click=on_test disabled=move || state.get().testing>
                    {move || if state.get().testing { "Testing..." } else { "Test connection" }}
                </button>
            </div>

            {move || match state.get().status {
                StatusView::Loading => {
                    view! { <p class="status-panel__loading">"Checking assistant status..."</p> }.into_any()
                }
                StatusView::Failed(message) => {
                    view! { <div class="status-panel__error">{message}</div> }.into_any()
                }
                StatusView::Ready(status) => {
                    let (badge, label) = if status.connected {
                        ("status-badge status-badge--ok", "Connected")
                    } else {
                        ("status-badge status-badge--down", "Disconnected")
                    };
                    let key = api_key_label(&status).to_owned();
                    let last = status.last_request.clone().unwrap_or_else(|| "Never".to_owned());
                    view! {
                        <dl class="status-panel__details">
                            <dt>"Connection"</dt>
                            <dd><span class=badge>{label}</span></dd>
                            <dt>"Provider"</dt>
                            <dd>{status.provider}</dd>
                            <dt>"Model"</dt>
                            <dd>{status.model}</dd>
                            <dt>"API key"</dt>
                            <dd><code>{key}</code></dd>
                            <dt>"Total requests"</dt>
                            <dd>{status.total_requests}</dd>
                            <dt>"Last request"</dt>
                            <dd>{last}</dd>
                        </dl>
                    }
                        .into_any()
                }
            }}

            {move || {
                state
                    .get()
                    .test_result
                    .map(|result| match result {
                        Ok(response) => {
                            view! { <div class="status-panel__test status-panel__test--ok">{response}</div> }
                                .into_any()
                        }
                        Err(message) => {
                            view! { <div class="status-panel__test status-panel__test--error">{message}</div> }
                                .into_any()
                        }
                    })
            }}
        </section>
    }
}
