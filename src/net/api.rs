//! Assistant and user-management endpoint calls.
//!
//! ERROR HANDLING
//! ==============
//! All endpoints share one envelope convention: `success: false` (or a non-2xx
//! status) carries an `error` or `message` string. [`read_envelope`] turns that
//! into [`ApiError::Server`] so callers only ever see typed payloads or a
//! typed failure.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, HttpResponse, REQUESTED_WITH_HEADER, Transport};
use super::types::{
    AssistantStatus, ChatReply, ChatRequest, ConnectionTestReply, GeneratedImage, ImageReply, ImageRequest, LogEntry,
    LogsEnvelope, StatusEnvelope, UserDeletionResult,
};
use crate::config::Endpoints;
use crate::error::{ApiError, GENERIC_SERVER_ERROR};

/// Filter value meaning "every category".
pub const ALL_LOGS: &str = "all";

pub(crate) fn logs_url(base: &str, filter: Option<&str>) -> String {
    match filter.map(str::trim) {
        Some(filter) if !filter.is_empty() && filter != ALL_LOGS => {
            format!("{base}?filter={}", urlencoding::encode(filter))
        }
        _ => base.to_owned(),
    }
}

fn server_message(body: &serde_json::Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(serde_json::Value::as_str))
        .filter(|text| !text.trim().is_empty())
        .map(str::to_owned)
}

/// Decode a `{ success, ... }` envelope into `T`.
///
/// # Errors
///
/// [`ApiError::Server`] when the status is not 2xx or `success` is false,
/// [`ApiError::Decode`] when the body is not the expected JSON.
pub(crate) fn read_envelope<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    let body: serde_json::Value = match serde_json::from_str(&response.body) {
        Ok(body) => body,
        Err(e) if response.is_ok() => return Err(ApiError::Decode(e.to_string())),
        Err(_) => serde_json::Value::Null,
    };

    let success = body
        .get("success")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(response.is_ok());
    if !response.is_ok() || !success {
        let message = server_message(&body).unwrap_or_else(|| {
            if response.is_ok() {
                GENERIC_SERVER_ERROR.to_owned()
            } else {
                format!("{GENERIC_SERVER_ERROR} with status {}", response.status)
            }
        });
        return Err(ApiError::Server { status: response.status, message });
    }

    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Client for the `/assistant/*` endpoints.
#[derive(Clone, Debug)]
pub struct AssistantApi<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> AssistantApi<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self { transport, endpoints }
    }

    /// Send one chat message and return the assistant's reply text.
    ///
    /// # Errors
    ///
    /// Any transport, envelope, or decode failure.
    pub async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self
            .transport
            .send(HttpRequest::post(&self.endpoints.chat).json(body))
            .await?;
        let reply: ChatReply = read_envelope(&response)?;
        Ok(reply.response)
    }

    /// # Errors
    ///
    /// Any transport, envelope, or decode failure.
    pub async fn status(&self) -> Result<AssistantStatus, ApiError> {
        let response = self.transport.send(HttpRequest::get(&self.endpoints.status)).await?;
        let envelope: StatusEnvelope = read_envelope(&response)?;
        Ok(envelope.status)
    }

    /// # Errors
    ///
    /// Any transport, envelope, or decode failure.
    pub async fn test_connection(&self) -> Result<String, ApiError> {
        let response = self
            .transport
            .send(HttpRequest::post(&self.endpoints.test_connection))
            .await?;
        let reply: ConnectionTestReply = read_envelope(&response)?;
        Ok(reply.response)
    }

    /// Fetch log entries, optionally constrained to one category.
    ///
    /// # Errors
    ///
    /// Any transport, envelope, or decode failure.
    pub async fn logs(&self, filter: Option<&str>) -> Result<Vec<LogEntry>, ApiError> {
        let url = logs_url(&self.endpoints.logs, filter);
        let response = self.transport.send(HttpRequest::get(url)).await?;
        let envelope: LogsEnvelope = read_envelope(&response)?;
        Ok(envelope.logs)
    }

    /// # Errors
    ///
    /// Any transport or envelope failure.
    pub async fn clear_logs(&self) -> Result<(), ApiError> {
        let response = self
            .transport
            .send(HttpRequest::post(&self.endpoints.clear_logs))
            .await?;
        read_envelope::<serde_json::Value>(&response)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Any transport, envelope, or decode failure.
    pub async fn generate_image(&self, request: &ImageRequest) -> Result<GeneratedImage, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self
            .transport
            .send(HttpRequest::post(&self.endpoints.generate_image).json(body))
            .await?;
        let reply: ImageReply = read_envelope(&response)?;
        Ok(GeneratedImage { image_url: reply.image_url, prompt: request.prompt.clone() })
    }
}

/// Client for the server-rendered user management forms.
#[derive(Clone, Debug)]
pub struct UsersApi<T> {
    transport: T,
}

impl<T: Transport> UsersApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Post the deletion form to `action` as an asynchronous request.
    ///
    /// # Errors
    ///
    /// Any transport, envelope, or decode failure; `success: false` becomes
    /// [`ApiError::Server`] carrying the server's reason.
    pub async fn delete_user<'a>(
        &self,
        action: &str,
        fields: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<UserDeletionResult, ApiError> {
        let request = HttpRequest::post(action)
            .header(REQUESTED_WITH_HEADER.0, REQUESTED_WITH_HEADER.1)
            .form(fields);
        let response = self.transport.send(request).await?;
        read_envelope(&response)
    }
}
