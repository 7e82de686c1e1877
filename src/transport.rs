// Transport boundary - the single place HTTP happens
//
// Every operation delegates to the four verb primitives on the `Transport`
// trait. The production implementation wraps reqwest and owns authentication,
// JSON decoding, and pagination-link capture. Tests swap in a recording
// double, so the method surface itself never touches the network.

use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, LINK};
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;

/// Default request timeout for the shipped HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// What a single round trip produced: the decoded JSON body plus the
/// follow-up URL from the `Link: <...>; rel="next"` header, if any.
#[derive(Debug, Clone)]
pub struct Payload {
    pub body: Value,
    pub next: Option<String>,
}

impl Payload {
    /// An empty payload, as returned by 204-style endpoints.
    pub fn empty() -> Self {
        Payload {
            body: Value::Null,
            next: None,
        }
    }
}

/// The HTTP collaborator consumed by the client surface.
///
/// Each method performs exactly one request. `path` is either a service path
/// (joined onto the configured base URL) or an absolute URL, which pagination
/// uses when following next links.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Payload>;
    async fn post(&self, path: &str, body: Option<Value>) -> Result<Payload>;
    async fn put(&self, path: &str, body: Option<Value>) -> Result<Payload>;
    async fn delete(&self, path: &str) -> Result<Payload>;
}

/// Production transport over reqwest: Bearer auth, JSON bodies, Link-header
/// pagination capture. Timeout and retry policy stop here — callers above
/// this boundary see errors unchanged.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpTransport {
    /// Build a transport against `base_url`, authenticating every request
    /// with `token` as a Bearer credential.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self> {
        // Connection pooling matters here: a board sync fires many small
        // requests against the same host.
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .user_agent(user_agent)
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(HttpTransport {
            http,
            base_url,
            token: token.into(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        // Pagination next links arrive as absolute URLs; use them verbatim.
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> Result<Payload> {
        let url = self.url_for(path);
        tracing::debug!(%method, %url, "issuing request");

        let mut request = self.http.request(method, &url).bearer_auth(&self.token);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let next = next_link(response.headers());
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), %url, "request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        Ok(Payload { body, next })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Payload> {
        self.send(Method::GET, path, query, None).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Payload> {
        self.send(Method::POST, path, &[], body).await
    }

    async fn put(&self, path: &str, body: Option<Value>) -> Result<Payload> {
        self.send(Method::PUT, path, &[], body).await
    }

    async fn delete(&self, path: &str) -> Result<Payload> {
        self.send(Method::DELETE, path, &[], None).await
    }
}

/// Extract the `rel="next"` target from a `Link` header, if present.
///
/// The header carries comma-separated entries shaped like
/// `<https://host/page?page=2>; rel="next"`.
fn next_link(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(LINK)?.to_str().ok()?;
    parse_next_link(raw)
}

fn parse_next_link(raw: &str) -> Option<String> {
    for entry in raw.split(',') {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts
            .any(|p| matches!(p.trim(), "rel=\"next\"" | "rel=next"));
        if is_next {
            return Some(target.trim_start_matches('<').trim_end_matches('>').to_string());
        }
    }
    None
}
