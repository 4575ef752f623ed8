//! HTTP transport seam.
//!
//! Every endpoint call goes through [`Transport::send`]: one request in, one
//! response out. The browser implementation uses `gloo-net`; tests substitute
//! a recording fake so "no request was issued" is observable.
//!
//! TRADE-OFFS
//! ==========
//! The trait is `?Send` because browser futures are single-threaded. There is
//! no timeout or cancellation: a request runs to completion or failure.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;

use crate::error::ApiError;

/// Header the server uses to tell an asynchronous form post from a page load.
pub const REQUESTED_WITH_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Already URL-encoded `key=value&...` pairs.
    Form(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), headers: Vec::new(), body: RequestBody::Empty }
    }

    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self { method: Method::Post, url: url.into(), headers: Vec::new(), body: RequestBody::Empty }
    }

    #[must_use]
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    /// Attach a form body, encoding each pair in order.
    #[must_use]
    pub fn form<'a>(mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.body = RequestBody::Form(encode_form(pairs));
        self
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }
}

/// Raw response: status code plus body text, decoded by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single HTTP request.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return whatever the server answered.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the request could not be sent or
    /// the body could not be read. Non-2xx statuses are *not* errors here.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

pub(crate) fn encode_form<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// `fetch`-backed transport for the running page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::{Method as WireMethod, RequestBuilder};

        let method = match request.method {
            Method::Get => WireMethod::GET,
            Method::Post => WireMethod::POST,
        };
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(encoded) => builder.header("Content-Type", FORM_CONTENT_TYPE).body(encoded),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = built.send().await.map_err(|e| {
            log::warn!("request to {} failed: {e}", request.url);
            ApiError::Transport(e.to_string())
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        log::debug!("{} {} -> {status}", if request.method == Method::Get { "GET" } else { "POST" }, request.url);
        Ok(HttpResponse { status, body })
    }
}
