//! Quick platform insights backed by the AI query endpoint.

#[cfg(test)]
#[path = "query_panel_test.rs"]
mod query_panel_test;

use leptos::prelude::*;

use crate::error::ApiError;
use crate::net::query::{DEFAULT_QUERY_LIMIT, QueryClient, QueryType, TopGames};
use crate::net::transport::Transport;

/// Buttons offered by the panel, in display order.
pub const QUICK_QUERIES: &[(QueryType, &str)] = &[
    (QueryType::PlatformOverview, "Platform overview"),
    (QueryType::TopGames, "Top games"),
    (QueryType::MostPlayedGame, "Most played"),
    (QueryType::RareGames, "Rare games"),
    (QueryType::RandomGames, "Random games"),
    (QueryType::RandomUsers, "Random users"),
    (QueryType::Recommendations, "Recommendations"),
];

/// Run one quick query with the panel's default options.
///
/// # Errors
///
/// See [`QueryClient::send_query`].
pub async fn run_query<T: Transport>(
    client: &QueryClient<T>,
    kind: QueryType,
    user_id: Option<&str>,
) -> Result<serde_json::Value, ApiError> {
    match kind {
        QueryType::RandomGames => client.random_games(DEFAULT_QUERY_LIMIT).await,
        QueryType::RareGames => client.rare_games(DEFAULT_QUERY_LIMIT).await,
        QueryType::TopGames => client.top_games(TopGames::default()).await,
        QueryType::MostPlayedGame => client.most_played_game(None).await,
        QueryType::Recommendations => client.recommendations(user_id, DEFAULT_QUERY_LIMIT).await,
        QueryType::RandomUsers => client.random_users(DEFAULT_QUERY_LIMIT).await,
        QueryType::PlatformOverview => client.platform_overview().await,
    }
}

#[component]
pub fn QueryPanel() -> impl IntoView {
    #[cfg(feature = "csr")]
    let config = StoredValue::new(expect_context::<crate::config::ClientConfig>());
    let busy = RwSignal::new(false);
    let result = RwSignal::new(None::<Result<String, String>>);

    let on_query = move |kind: QueryType| {
        if busy.get_untracked() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            busy.set(true);
            let (endpoint, user_id) = config.with_value(|c| (c.endpoints.ai_query.clone(), c.user_id.clone()));
            leptos::task::spawn_local(async move {
                let client = QueryClient::new(crate::net::transport::BrowserTransport, endpoint);
                let outcome = run_query(&client, kind, user_id.as_deref())
                    .await
                    .map(|value| serde_json::to_string_pretty(&value).unwrap_or_default())
                    .map_err(|e| e.user_message());
                result.set(Some(outcome));
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = kind;
    };

    view! {
        <section class="query-panel">
            <h3>"Quick Insights"</h3>
            <div class="query-panel__buttons">
                {QUICK_QUERIES
                    .iter()
                    .map(|(kind, label)| {
                        let kind = *kind;
                        view! {
                            <button class="btn" on:click=move |_| on_query(kind) disabled=move || busy.get()>
                                {*label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {move || match result.get() {
                None => ().into_any(),
                Some(Ok(json)) => view! { <pre class="query-panel__result">{json}</pre> }.into_any(),
                Some(Err(message)) => view! { <div class="query-panel__error">{message}</div> }.into_any(),
            }}
        </section>
    }
}
