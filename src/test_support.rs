//! Recording fakes for the host capabilities, shared by unit tests.
//!
//! Each fake is a cheap `Rc` handle: a test keeps one clone to inspect what
//! the code under test did with the other.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::net::transport::{HttpRequest, HttpResponse, Transport};
use crate::state::chat::SessionStore;
use crate::util::confirm::Confirm;
use crate::util::download::Downloader;
use crate::util::notify::{Notifier, Severity};
use crate::util::timer::Timer;

#[derive(Default)]
struct TransportLog {
    requests: Vec<HttpRequest>,
    replies: VecDeque<Result<HttpResponse, ApiError>>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    inner: Rc<RefCell<TransportLog>>,
}

impl FakeTransport {
    pub(crate) fn replying(status: u16, body: serde_json::Value) -> Self {
        let fake = Self::default();
        fake.push_json(status, body);
        fake
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_raw(status, &body.to_string());
    }

    pub(crate) fn push_raw(&self, status: u16, body: &str) {
        self.inner
            .borrow_mut()
            .replies
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub(crate) fn push_fault(&self, cause: &str) {
        self.inner
            .borrow_mut()
            .replies
            .push_back(Err(ApiError::Transport(cause.to_owned())));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut log = self.inner.borrow_mut();
        log.requests.push(request);
        log.replies
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    seen: Rc<RefCell<Vec<(String, Severity)>>>,
}

impl RecordingNotifier {
    pub(crate) fn seen(&self) -> Vec<(String, Severity)> {
        self.seen.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.seen.borrow_mut().push((message.to_owned(), severity));
    }
}

/// Answers every confirmation with a fixed value and records the prompts.
#[derive(Clone)]
pub(crate) struct ScriptedConfirm {
    answer: bool,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedConfirm {
    pub(crate) fn answering(answer: bool) -> Self {
        Self { answer, prompts: Rc::default() }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_owned());
        self.answer
    }
}

/// Completes immediately, remembering every requested delay.
#[derive(Clone, Default)]
pub(crate) struct InstantTimer {
    slept: Rc<RefCell<Vec<u32>>>,
}

impl InstantTimer {
    pub(crate) fn slept(&self) -> Vec<u32> {
        self.slept.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Timer for InstantTimer {
    async fn sleep(&self, ms: u32) {
        self.slept.borrow_mut().push(ms);
    }
}

#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub(crate) fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(key, value);
        store
    }

    pub(crate) fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingDownloader {
    saved: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingDownloader {
    pub(crate) fn saved(&self) -> Vec<(String, String)> {
        self.saved.borrow().clone()
    }
}

impl Downloader for RecordingDownloader {
    fn save(&self, url: &str, filename: &str) {
        self.saved.borrow_mut().push((url.to_owned(), filename.to_owned()));
    }
}

/// Drive a future to completion on the current thread.
pub(crate) fn run<F: std::future::Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}
