//! In-memory collaborators for unit tests.

use async_trait::async_trait;
use cg_api_types::TokenRequest;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use crate::error::TransportError;
use crate::status::{StatusMessage, StatusSurface};
use crate::transport::{GateTransport, HttpReply};
use crate::trigger::{TriggerControl, TriggerView};
use crate::widget::{WidgetElement, WidgetHost};

/// Scripted transport: replies are queued per URL and every request is recorded.
#[derive(Default)]
pub struct FakeTransport {
    replies: RefCell<HashMap<String, VecDeque<Result<HttpReply, TransportError>>>>,
    requests: RefCell<Vec<(String, TokenRequest)>>,
    yields: Cell<bool>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend once before replying, like a real network round trip.
    pub fn yielding(self) -> Self {
        self.yields.set(true);
        self
    }

    pub fn reply(&self, url: &str, status: u16, body: &str) -> &Self {
        self.push(url, Ok(HttpReply::new(status, body)))
    }

    pub fn fail(&self, url: &str, detail: &str) -> &Self {
        self.push(url, Err(TransportError::new(detail)))
    }

    fn push(&self, url: &str, reply: Result<HttpReply, TransportError>) -> &Self {
        self.replies
            .borrow_mut()
            .entry(url.to_owned())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<(String, TokenRequest)> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|(u, _)| u == url).count()
    }
}

#[async_trait(?Send)]
impl GateTransport for FakeTransport {
    async fn post_json(&self, url: &str, body: &TokenRequest) -> Result<HttpReply, TransportError> {
        self.requests
            .borrow_mut()
            .push((url.to_owned(), body.clone()));
        if self.yields.get() {
            tokio::task::yield_now().await;
        }
        self.replies
            .borrow_mut()
            .get_mut(url)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(TransportError::new(format!("no scripted reply for {url}"))))
    }
}

#[derive(Default)]
pub struct RecordingStatus {
    current: RefCell<Option<StatusMessage>>,
    history: RefCell<Vec<StatusMessage>>,
}

impl RecordingStatus {
    pub fn current(&self) -> Option<StatusMessage> {
        self.current.borrow().clone()
    }

    pub fn history(&self) -> Vec<StatusMessage> {
        self.history.borrow().clone()
    }
}

impl StatusSurface for RecordingStatus {
    fn show(&self, message: &StatusMessage) {
        *self.current.borrow_mut() = Some(message.clone());
        self.history.borrow_mut().push(message.clone());
    }
}

pub struct RecordingTrigger {
    view: Cell<TriggerView>,
    renders: RefCell<Vec<TriggerView>>,
}

impl Default for RecordingTrigger {
    fn default() -> Self {
        Self {
            view: Cell::new(TriggerView::Hidden),
            renders: RefCell::new(Vec::new()),
        }
    }
}

impl RecordingTrigger {
    pub fn view(&self) -> TriggerView {
        self.view.get()
    }

    pub fn renders(&self) -> Vec<TriggerView> {
        self.renders.borrow().clone()
    }
}

impl TriggerControl for RecordingTrigger {
    fn render(&self, view: TriggerView) {
        self.view.set(view);
        self.renders.borrow_mut().push(view);
    }
}

pub struct FakeHost {
    container: bool,
    scripts: RefCell<Vec<String>>,
    contents: RefCell<Option<WidgetElement>>,
    mounts: Cell<usize>,
    revealed: Cell<bool>,
}

impl FakeHost {
    pub fn with_container() -> Self {
        Self::new(true)
    }

    pub fn without_container() -> Self {
        Self::new(false)
    }

    fn new(container: bool) -> Self {
        Self {
            container,
            scripts: RefCell::new(Vec::new()),
            contents: RefCell::new(None),
            mounts: Cell::new(0),
            revealed: Cell::new(false),
        }
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }

    pub fn contents(&self) -> Option<WidgetElement> {
        self.contents.borrow().clone()
    }

    pub fn mount_count(&self) -> usize {
        self.mounts.get()
    }

    pub fn revealed(&self) -> bool {
        self.revealed.get()
    }
}

impl WidgetHost for FakeHost {
    fn has_container(&self) -> bool {
        self.container
    }

    fn script_present(&self, src: &str) -> bool {
        self.scripts.borrow().iter().any(|s| s == src)
    }

    fn append_script(&self, src: &str) {
        self.scripts.borrow_mut().push(src.to_owned());
    }

    fn replace_contents(&self, element: &WidgetElement) {
        *self.contents.borrow_mut() = Some(element.clone());
        self.mounts.set(self.mounts.get() + 1);
    }

    fn reveal(&self) {
        self.revealed.set(true);
    }
}
