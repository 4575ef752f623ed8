//! Assistant chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the session feed from shared `ChatSession` state and hands input to
//! `services::chat`. The transcript is restored from session storage when the
//! panel mounts.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatRole, ChatSession};
use crate::util::markup::{escape_html, render_markup};

/// HTML for one feed entry. User text is only escaped; assistant and error
/// text goes through the markup pipeline.
pub(crate) fn message_html(message: &ChatMessage) -> String {
    match message.role {
        ChatRole::User => escape_html(&message.message),
        ChatRole::Assistant | ChatRole::Error => render_markup(&message.message),
    }
}

#[component]
pub fn ChatPanel() -> impl IntoView {
    #[cfg(feature = "csr")]
    let config = StoredValue::new(expect_context::<crate::config::ClientConfig>());
    let session = expect_context::<RwSignal<ChatSession>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    config.with_value(|c| crate::services::chat::ChatService::browser(c).restore(&session));

    Effect::new(move || {
        let state = session.get();
        let _ = state.feed.len();
        let _ = state.pending;

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || session.get_untracked().pending {
            return;
        }
        input.set(String::new());

        #[cfg(feature = "csr")]
        {
            let service = config.with_value(crate::services::chat::ChatService::browser);
            leptos::task::spawn_local(async move {
                service.submit(&session, &text).await;
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_clear = move |_| {
        #[cfg(feature = "csr")]
        config.with_value(|c| crate::services::chat::ChatService::browser(c).clear(&session));
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <h3>"AI Assistant"</h3>
                <button class="btn chat-panel__clear" on:click=on_clear>
                    "Clear chat"
                </button>
            </div>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    session
                        .get()
                        .feed
                        .iter()
                        .map(|msg| {
                            let class = format!("chat-message chat-message--{}", msg.role.as_str());
                            let html = message_html(msg);
                            let stamp = msg.stamp.clone();
                            view! {
                                <div class=class>
                                    <div class="chat-message__body" inner_html=html></div>
                                    <span class="chat-message__time">{stamp}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || session.get().pending>
                    <div class="chat-message chat-message--assistant chat-message--pending">
                        <span class="chat-message__typing">"Thinking..."</span>
                    </div>
                </Show>
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <textarea
                    class="chat-panel__input"
                    rows="2"
                    placeholder="Ask about users, games, or activity..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    class="btn btn--primary chat-panel__send"
                    type="submit"
                    disabled=move || session.get().pending || input.get().trim().is_empty()
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}
