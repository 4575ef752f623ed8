//! AI query client for `POST /admin/api/ai-query`.
//!
//! A thin parameter-shaping wrapper: callers name a [`QueryType`] and any
//! extra options, the client POSTs `{ queryType, limit, ...extra }` and hands
//! back the server's JSON untouched. Authorization for the admin-only query
//! types is enforced by the server, not here.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde::Serialize;

use super::transport::{HttpRequest, Transport};
use crate::error::{ApiError, GENERIC_SERVER_ERROR};

pub const DEFAULT_QUERY_LIMIT: u32 = 5;

/// Query names understood by the AI query endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryType {
    RandomGames,
    RareGames,
    TopGames,
    MostPlayedGame,
    Recommendations,
    RandomUsers,
    PlatformOverview,
}

/// A query under construction.
///
/// `query_type` is optional only so a missing tag is a local validation
/// failure instead of a malformed request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryRequest {
    pub query_type: Option<QueryType>,
    pub limit: Option<u32>,
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl QueryRequest {
    #[must_use]
    pub fn new(query_type: QueryType) -> Self {
        Self { query_type: Some(query_type), ..Self::default() }
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Add a free-form option, passed through verbatim.
    #[must_use]
    pub fn param(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.to_owned(), value.into());
        self
    }

    /// Build the JSON body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] when no query type was set.
    pub fn to_body(&self) -> Result<serde_json::Value, ApiError> {
        let query_type = self.query_type.ok_or(ApiError::Validation("queryType is required"))?;
        let mut body = serde_json::Map::new();
        body.insert(
            "queryType".to_owned(),
            serde_json::to_value(query_type).map_err(|e| ApiError::Decode(e.to_string()))?,
        );
        body.insert("limit".to_owned(), self.limit.unwrap_or(DEFAULT_QUERY_LIMIT).into());
        body.extend(self.extra.clone());
        Ok(serde_json::Value::Object(body))
    }
}

/// Ranking used by [`QueryClient::top_games`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopGames<'a> {
    pub criteria: &'a str,
    /// Restrict to the last `days` days; `None` means all time.
    pub days: Option<u32>,
    pub limit: u32,
}

impl Default for TopGames<'_> {
    fn default() -> Self {
        Self { criteria: "plays", days: None, limit: DEFAULT_QUERY_LIMIT }
    }
}

#[derive(Clone, Debug)]
pub struct QueryClient<T> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> QueryClient<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self { transport, endpoint: endpoint.into() }
    }

    /// POST a query and return the raw JSON reply.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] before any request when `queryType` is
    /// missing; [`ApiError::Server`] for non-2xx replies, carrying the
    /// server's `error` text when present.
    pub async fn send_query(&self, request: &QueryRequest) -> Result<serde_json::Value, ApiError> {
        let body = request.to_body()?;
        let response = self
            .transport
            .send(HttpRequest::post(&self.endpoint).json(body))
            .await?;

        let parsed = serde_json::from_str::<serde_json::Value>(&response.body);
        if !response.is_ok() {
            let message = parsed
                .ok()
                .and_then(|body| body.get("error").and_then(serde_json::Value::as_str).map(str::to_owned))
                .unwrap_or_else(|| format!("{GENERIC_SERVER_ERROR} with status {}", response.status));
            log::warn!("ai query failed ({}): {message}", response.status);
            return Err(ApiError::Server { status: response.status, message });
        }
        parsed.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// # Errors
    ///
    /// See [`QueryClient::send_query`].
    pub async fn random_games(&self, limit: u32) -> Result<serde_json::Value, ApiError> {
        self.send_query(&QueryRequest::new(QueryType::RandomGames).limit(limit))
            .await
    }

    /// # Errors
    ///
    /// See [`QueryClient::send_query`].
    pub async fn rare_games(&self, limit: u32) -> Result<serde_json::Value, ApiError> {
        self.send_query(&QueryRequest::new(QueryType::RareGames).limit(limit))
            .await
    }

    /// # Errors
    ///
    /// See [`QueryClient::send_query`].
    pub async fn top_games(&self, options: TopGames<'_>) -> Result<serde_json::Value, ApiError> {
        let mut request = QueryRequest::new(QueryType::TopGames)
            .limit(options.limit)
            .param("criteria", options.criteria);
        if let Some(days) = options.days {
            request = request.param("days", days);
        }
        self.send_query(&request).await
    }

    /// # Errors
    ///
    /// See [`QueryClient::send_query`].
    pub async fn most_played_game(&self, days: Option<u32>) -> Result<serde_json::Value, ApiError> {
        let mut request = QueryRequest::new(QueryType::MostPlayedGame);
        if let Some(days) = days {
            request = request.param("days", days);
        }
        self.send_query(&request).await
    }

    /// Personalized recommendations for `user_id`, or for the caller when `None`.
    ///
    /// # Errors
    ///
    /// See [`QueryClient::send_query`].
    pub async fn recommendations(&self, user_id: Option<&str>, limit: u32) -> Result<serde_json::Value, ApiError> {
        let mut request = QueryRequest::new(QueryType::Recommendations).limit(limit);
        if let Some(user_id) = user_id {
            request = request.param("userId", user_id);
        }
        self.send_query(&request).await
    }

    /// Admin only.
    ///
    /// # Errors
    ///
    /// See [`QueryClient::send_query`].
    pub async fn random_users(&self, limit: u32) -> Result<serde_json::Value, ApiError> {
        self.send_query(&QueryRequest::new(QueryType::RandomUsers).limit(limit))
            .await
    }

    /// Admin only.
    ///
    /// # Errors
    ///
    /// See [`QueryClient::send_query`].
    pub async fn platform_overview(&self) -> Result<serde_json::Value, ApiError> {
        self.send_query(&QueryRequest::new(QueryType::PlatformOverview))
            .await
    }
}
