use async_trait::async_trait;
use cg_api_types::{GateAck, TokenRequest};
use serde_json::Value;
use std::rc::Rc;

use crate::error::TransportError;

/// Raw HTTP reply as seen by the gate. Classification happens in the core,
/// so transports stay dumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as a [`GateAck`]. `None` when the body is empty or not a JSON object.
    pub fn ack(&self) -> Option<GateAck> {
        let body = self.body.trim();
        if body.is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }
}

/// Network seam. Implemented with `fetch` in the browser and `reqwest` natively.
///
/// Declared `?Send` so the same controller runs on the single-threaded browser loop.
#[async_trait(?Send)]
pub trait GateTransport {
    async fn post_json(&self, url: &str, body: &TokenRequest) -> Result<HttpReply, TransportError>;
}

#[async_trait(?Send)]
impl<T: GateTransport + ?Sized> GateTransport for &T {
    async fn post_json(&self, url: &str, body: &TokenRequest) -> Result<HttpReply, TransportError> {
        (**self).post_json(url, body).await
    }
}

#[async_trait(?Send)]
impl<T: GateTransport + ?Sized> GateTransport for Rc<T> {
    async fn post_json(&self, url: &str, body: &TokenRequest) -> Result<HttpReply, TransportError> {
        (**self).post_json(url, body).await
    }
}
