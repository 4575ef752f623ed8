//! AI assistant console: chat, status, logs, image generation, quick queries.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::image_panel::ImagePanel;
use crate::components::log_viewer::LogViewer;
use crate::components::query_panel::QueryPanel;
use crate::components::status_panel::StatusPanel;
use crate::state::assistant::AssistantState;
use crate::state::chat::ChatSession;
use crate::state::image::ImageView;

#[component]
pub fn AssistantPage() -> impl IntoView {
    provide_context(RwSignal::new(ChatSession::default()));
    provide_context(RwSignal::new(AssistantState::default()));
    provide_context(RwSignal::new(ImageView::default()));

    view! {
        <div class="assistant-page">
            <div class="assistant-page__main">
                <ChatPanel/>
                <ImagePanel/>
            </div>
            <aside class="assistant-page__side">
                <StatusPanel/>
                <QueryPanel/>
                <LogViewer/>
            </aside>
        </div>
    }
}
