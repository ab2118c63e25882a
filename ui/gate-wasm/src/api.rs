//! HTTP client for the gate endpoints.
//!
//! Wraps `fetch` via `gloo-net`. Relative endpoint paths resolve against the
//! page origin, so the default config works when the hooks are proxied
//! same-origin.

use async_trait::async_trait;
use cg_api_types::TokenRequest;
use cg_gate_core::{GateTransport, HttpReply, TransportError};
use gloo_net::http::Request;

#[derive(Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl GateTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: &TokenRequest) -> Result<HttpReply, TransportError> {
        let request = Request::post(url)
            .json(body)
            .map_err(|e| TransportError::new(format!("encode request: {e}")))?;

        let resp = request
            .send()
            .await
            .map_err(|e| TransportError::new(format!("fetch error: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| TransportError::new(format!("text error: {e}")))?;

        Ok(HttpReply::new(status, text))
    }
}
