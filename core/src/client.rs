//! Client facade for the Pinterest v1 API.
//!
//! # Design
//! `Client` owns the single `Requester` and hands out borrowed controllers,
//! one per resource group. Configuration (`register_access_token`,
//! `set_transport`, ...) takes `&mut self`, so it cannot race with requests
//! issued through the same client. It only replaces a slot, so it cannot fail.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::controllers::{
    BoardsController, MeController, OAuthController, PinsController, UsersController,
};
use crate::http::{HttpRequest, Transport, UreqTransport};
use crate::request::Requester;

pub const DEFAULT_BASE_URL: &str = "https://api.pinterest.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Builder for a [`Client`] pointed somewhere other than the defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
    content_type: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }
}

impl ClientBuilder {
    /// API root, e.g. a mock server's `http://127.0.0.1:3000/v1`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Global timeout applied by the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn build(self) -> Client {
        let transport = UreqTransport::new(self.timeout);
        Client {
            requester: Requester::new(&self.base_url, &self.content_type, Box::new(transport)),
        }
    }
}

/// Entry point for every API call.
///
/// ```no_run
/// use pinterest_core::Client;
///
/// let mut client = Client::new();
/// client.register_access_token("my-token");
/// let pin = client.pins().get("123", None)?;
/// println!("{} has {} repins", pin.note, pin.counts.repins);
/// # Ok::<(), pinterest_core::ApiError>(())
/// ```
#[derive(Debug)]
pub struct Client {
    requester: Requester,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Client for the public API with a 10s timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Authorizes every following request with `access_token`.
    ///
    /// Calling it again replaces the previous token.
    pub fn register_access_token(&mut self, access_token: impl Into<String>) -> &mut Self {
        let access_token = access_token.into();
        debug!("registering access token");
        self.set_request_interceptor(move |request: &mut HttpRequest| {
            request.set_query("access_token", access_token.as_str());
        })
    }

    /// Installs a hook run on every request before dispatch. Replaces any
    /// previous hook, including the one set by `register_access_token`.
    pub fn set_request_interceptor<F>(&mut self, interceptor: F) -> &mut Self
    where
        F: Fn(&mut HttpRequest) + Send + Sync + 'static,
    {
        self.requester.set_interceptor(Arc::new(interceptor));
        self
    }

    /// Replaces the transport, e.g. with a test double.
    pub fn set_transport<T: Transport + 'static>(&mut self, transport: T) -> &mut Self {
        self.requester.set_transport(Box::new(transport));
        self
    }

    /// Replaces the underlying `ureq` agent (proxies, TLS, timeouts).
    pub fn set_http_client(&mut self, agent: ureq::Agent) -> &mut Self {
        self.set_transport(UreqTransport::with_agent(agent))
    }

    pub fn base_url(&self) -> &str {
        self.requester.base_url()
    }

    pub fn oauth(&self) -> OAuthController<'_> {
        OAuthController::new(&self.requester)
    }

    pub fn users(&self) -> UsersController<'_> {
        UsersController::new(&self.requester)
    }

    pub fn boards(&self) -> BoardsController<'_> {
        BoardsController::new(&self.requester)
    }

    pub fn pins(&self) -> PinsController<'_> {
        PinsController::new(&self.requester)
    }

    pub fn me(&self) -> MeController<'_> {
        MeController::new(&self.requester)
    }
}
