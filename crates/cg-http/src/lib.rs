use async_trait::async_trait;
use cg_api_types::TokenRequest;
use cg_gate_core::{GateTransport, HttpReply, TransportError};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Native HTTP transport for the gate endpoints.
///
/// Relative endpoint paths (the config defaults) are resolved against a base
/// URL, taken from the constructor or `CALLGATE_BASE_URL`.
pub struct ReqwestTransport {
    base_url: Option<String>,
    timeout: Duration,
    http: reqwest::Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ReqwestTransport {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .or_else(|| std::env::var("CALLGATE_BASE_URL").ok())
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty());
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn resolve(&self, url: &str) -> Result<String, TransportError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return Ok(url.to_owned());
        }
        match &self.base_url {
            Some(base) => Ok(format!("{base}/{}", url.trim_start_matches('/'))),
            None => Err(TransportError::new(format!(
                "relative endpoint '{url}' needs CALLGATE_BASE_URL"
            ))),
        }
    }
}

#[async_trait(?Send)]
impl GateTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &TokenRequest) -> Result<HttpReply, TransportError> {
        let url = self.resolve(url)?;

        let response = self
            .http
            .post(&url)
            .json(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| TransportError::new(format!("POST {url}: {err}")))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|err| TransportError::new(format!("POST {url} body: {err}")))?;

        debug!(%url, status, "gate endpoint replied");
        Ok(HttpReply::new(status, text))
    }
}
