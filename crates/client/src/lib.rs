//! Flapjack HTTP Client
//!
//! A native Rust client for the Flapjack monitoring service's REST API.
//!
//! # Quick Start
//!
//! ```no_run
//! use diner_client::{DinerClient, TimeWindow};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), diner_client::Error> {
//!     let client = DinerClient::new("https://flapjack.example.com:3081")?;
//!
//!     // Read queries return the decoded JSON body unchanged.
//!     if let Some(status) = client.status("web-01", Some("ping")).await? {
//!         println!("ping on web-01: {status}");
//!     }
//!
//!     let since = chrono::Utc::now() - chrono::Duration::days(7);
//!     let outages = client
//!         .outages("web-01", TimeWindow::new().start_time(since))
//!         .await?;
//!     println!("outages: {outages:?}");
//!
//!     // Write commands report success as a boolean.
//!     if client.acknowledge("web-01", "ping", Some("looking into it")).await? {
//!         println!("acknowledged");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - Entity, check, and status queries
//! - Outage, downtime, and maintenance history with optional time windows
//! - Acknowledgements and scheduled maintenance
//! - Argument validation before anything is sent
//! - Pluggable [`Transport`] for testing or custom HTTP stacks
//!
//! # Errors
//!
//! Missing or mistyped arguments fail with
//! [`Error::MissingRequiredParameter`] or [`Error::InvalidParameterType`]
//! before a request is built. Network failures and malformed JSON are not
//! interpreted; they surface as [`Error::Connection`] and
//! [`Error::Deserialization`]. Write commands never fail on an unexpected
//! status code: they return `false`.
//!
//! # Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use diner_client::DinerClientBuilder;
//! use std::time::Duration;
//!
//! let client = DinerClientBuilder::new("flapjack.internal:3081")
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```

mod actions;
mod config;
mod history;
mod status;
pub mod transport;

pub use config::ClientConfig;
pub use diner_core::{
    EndpointConfig, Error, Iso8601, Method, Operation, ParamValue, RequestDescriptor, Scheme,
    TimeWindow, Timestamp,
};
pub use transport::{HttpTransport, Transport, TransportResponse};

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `User-Agent` header.
const DEFAULT_USER_AGENT: &str = concat!("flapjack-diner/", env!("CARGO_PKG_VERSION"));

/// Status code that marks a write command as accepted.
const ACTION_ACCEPTED: u16 = 204;

/// HTTP client for the Flapjack API.
///
/// Holds the parsed endpoint and a [`Transport`]. Cheap to clone when the
/// transport is; every method performs exactly one round trip.
#[derive(Debug, Clone)]
pub struct DinerClient<T = HttpTransport> {
    endpoint: EndpointConfig,
    transport: T,
}

/// Builder for configuring a [`DinerClient`] over HTTP.
#[derive(Debug)]
pub struct DinerClientBuilder {
    base_uri: String,
    timeout: Duration,
    user_agent: String,
    client: Option<Client>,
}

impl DinerClientBuilder {
    /// Create a new builder for the given base endpoint.
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            client: None,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a custom reqwest Client.
    ///
    /// Useful for configuring TLS, proxies, or other advanced settings. The
    /// timeout and user agent set on this builder are ignored.
    #[must_use]
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Parse the endpoint and build the client.
    pub fn build(self) -> Result<DinerClient, Error> {
        let endpoint = EndpointConfig::parse(&self.base_uri)?;
        let client = match self.client {
            Some(c) => c,
            None => Client::builder()
                .timeout(self.timeout)
                .user_agent(self.user_agent)
                .build()
                .map_err(|e| Error::Configuration(e.to_string()))?,
        };

        debug!(endpoint = %endpoint, "configured Flapjack client");
        Ok(DinerClient::with_transport(
            endpoint,
            HttpTransport::new(client),
        ))
    }
}

impl DinerClient {
    /// Create a new client with default configuration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use diner_client::DinerClient;
    ///
    /// let client = DinerClient::new("http://localhost:3081").unwrap();
    /// ```
    pub fn new(base_uri: impl Into<String>) -> Result<Self, Error> {
        DinerClientBuilder::new(base_uri).build()
    }

    /// Create a builder for advanced configuration.
    pub fn builder(base_uri: impl Into<String>) -> DinerClientBuilder {
        DinerClientBuilder::new(base_uri)
    }

    /// Create a client from deserialized settings.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        config.into_builder().build()
    }
}

/// A request rendered against the client's endpoint, as it would be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URI including any query string.
    pub uri: String,
    /// Form body for write commands.
    pub body: Option<String>,
}

impl<T: Transport> DinerClient<T> {
    /// Create a client that sends requests through a custom transport.
    pub fn with_transport(endpoint: EndpointConfig, transport: T) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// The endpoint every request is sent to.
    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// The transport requests are sent through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate an operation and render the request without sending it.
    pub fn prepare(&self, operation: &Operation) -> Result<PreparedRequest, Error> {
        let request = operation.request()?;
        Ok(PreparedRequest {
            method: request.method,
            uri: request.uri(&self.endpoint),
            body: request.body,
        })
    }

    /// Run a read query and unwrap the decoded body.
    async fn fetch(&self, operation: &Operation) -> Result<Option<serde_json::Value>, Error> {
        let request = self.prepare(operation)?;
        debug!(operation = operation.name(), uri = %request.uri, "sending query");

        let Some(response) = self.transport.get(&request.uri).await? else {
            debug!(operation = operation.name(), "no response");
            return Ok(None);
        };
        debug!(operation = operation.name(), status = response.status, "query complete");
        Ok(response.body)
    }

    /// Run a write command; `true` iff the server answered 204.
    async fn perform(&self, operation: &Operation) -> Result<bool, Error> {
        let request = self.prepare(operation)?;
        debug!(operation = operation.name(), uri = %request.uri, "sending command");

        let response = self
            .transport
            .post(&request.uri, request.body.unwrap_or_default())
            .await?;
        if response.status == ACTION_ACCEPTED {
            Ok(true)
        } else {
            warn!(
                operation = operation.name(),
                status = response.status,
                "command not accepted"
            );
            Ok(false)
        }
    }
}
