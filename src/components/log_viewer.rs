//! Assistant activity log with category filter and clear control.

use leptos::prelude::*;

use crate::net::types::{LogEntry, LogStatus};
use crate::state::assistant::{AssistantState, LOG_FILTERS, LogsView};

fn log_row(entry: LogEntry) -> impl IntoView {
    let class = match entry.status {
        LogStatus::Error => "log-entry log-entry--error",
        LogStatus::Ok => "log-entry",
    };
    view! {
        <li class=class>
            <span class="log-entry__time">{entry.timestamp}</span>
            <span class="log-entry__event">{entry.event}</span>
            <span class="log-entry__role">{entry.user_role}</span>
            <span class="log-entry__message">{entry.message}</span>
        </li>
    }
}

#[component]
pub fn LogViewer() -> impl IntoView {
    #[cfg(feature = "csr")]
    let config = StoredValue::new(expect_context::<crate::config::ClientConfig>());
    #[cfg(feature = "csr")]
    let notifier = expect_context::<crate::util::notify::ToastNotifier>();
    let state = expect_context::<RwSignal<AssistantState>>();

    let load = move |filter: Option<String>| {
        #[cfg(feature = "csr")]
        {
            let service = config.with_value(|c| crate::services::assistant::StatusService::browser(c, notifier));
            leptos::task::spawn_local(async move {
                service.refresh_logs(&state, filter.as_deref()).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = filter;
    };
    load(None);

    let on_filter = move |ev: leptos::ev::Event| load(Some(event_target_value(&ev)));
    let on_refresh = move |_| load(state.get_untracked().filter);

    let on_clear = move |_| {
        #[cfg(feature = "csr")]
        {
            let service = config.with_value(|c| crate::services::assistant::StatusService::browser(c, notifier));
            leptos::task::spawn_local(async move {
                service.clear_logs(&state).await;
            });
        }
    };

    view! {
        <section class="log-viewer">
            <div class="log-viewer__header">
                <h3>"Activity Log"</h3>
                <span class="log-viewer__errors">
                    {move || {
                        let errors = state.get().logs.error_count();
                        (errors > 0).then(|| format!("{errors} error(s)"))
                    }}
                </span>
                <select class="log-viewer__filter" on:change=on_filter>
                    {LOG_FILTERS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=*value
                                    selected=move || {
                                        state.get().filter.as_deref().unwrap_or("all") == *value
                                    }
                                >
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button class="btn" on:click=on_refresh>
                    "Refresh"
                </button>
                <button class="btn btn--danger" on:click=on_clear disabled=move || state.get().clearing>
                    {move || if state.get().clearing { "Clearing..." } else { "Clear logs" }}
                </button>
            </div>

            {move || match state.get().logs {
                LogsView::Loading => view! { <p class="log-viewer__loading">"Loading logs..."</p> }.into_any(),
                LogsView::Empty => view! { <p class="log-viewer__empty">"No logs found"</p> }.into_any(),
                LogsView::Failed(message) => view! { <div class="log-viewer__error">{message}</div> }.into_any(),
                LogsView::Entries(entries) => {
                    view! { <ul class="log-viewer__list">{entries.into_iter().map(log_row).collect_view()}</ul> }
                        .into_any()
                }
            }}
        </section>
    }
}
