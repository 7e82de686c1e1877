// Client construction
//
// The client is a thin handle around an injected transport. Production use
// builds the reqwest-backed transport from a base URL and access token;
// tests (or alternative stacks) inject their own `Transport`.

use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Transport, DEFAULT_TIMEOUT};
use std::sync::Arc;
use std::time::Duration;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the service base URL, e.g.
/// `https://api.example.com/12345678`.
pub const ENV_BASE_URL: &str = "CARDTABLE_BASE_URL";

/// Environment variable holding the Bearer access token.
pub const ENV_ACCESS_TOKEN: &str = "CARDTABLE_ACCESS_TOKEN";

/// Handle for issuing card table API calls.
///
/// Cloning is cheap; all clones share one transport (and therefore one
/// connection pool). The client holds no other state — every operation is a
/// stateless round trip, so concurrent use needs no coordination beyond what
/// the transport provides.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    /// Build a client with default transport settings.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Client::builder().base_url(base_url).token(token).build()
    }

    /// Build a client from `CARDTABLE_BASE_URL` and `CARDTABLE_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_BASE_URL)
            .map_err(|_| Error::Config(format!("{ENV_BASE_URL} is not set")))?;
        let token = std::env::var(ENV_ACCESS_TOKEN)
            .map_err(|_| Error::Config(format!("{ENV_ACCESS_TOKEN} is not set")))?;
        Client::new(base_url, token)
    }

    /// Start a builder for non-default transport settings.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Build a client over a caller-provided transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Client { transport }
    }

    pub(crate) fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }
}

/// Builder for [`Client`] with transport knobs.
pub struct ClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        ClientBuilder {
            base_url: None,
            token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("cardtable/{VERSION}"),
        }
    }
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// User-Agent header sent on every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base URL is required".to_string()))?;
        let token = self
            .token
            .ok_or_else(|| Error::Config("access token is required".to_string()))?;

        let transport = HttpTransport::new(base_url, token, self.timeout, &self.user_agent)?;
        Ok(Client::with_transport(Arc::new(transport)))
    }
}
