//! The HTTP round trip behind every operation.
//!
//! [`Transport`] is the seam between request construction and the network.
//! [`HttpTransport`] is the `reqwest` implementation used by default; tests
//! and embedders can supply their own.

use std::future::Future;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::Error;

/// What the transport hands back for a request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body; `None` when the body was empty.
    pub body: Option<serde_json::Value>,
}

impl TransportResponse {
    /// A response with a status and no body.
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    /// A response with a status and a decoded body.
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }
}

/// Performs one request/response round trip.
///
/// Network failures and undecodable bodies are reported as
/// [`Error::Connection`] and [`Error::Deserialization`] and are passed to the
/// caller unchanged.
pub trait Transport: Send + Sync {
    /// Send a `GET` to an absolute URI.
    ///
    /// `Ok(None)` means the transport produced no response at all.
    fn get(
        &self,
        uri: &str,
    ) -> impl Future<Output = Result<Option<TransportResponse>, Error>> + Send;

    /// Send a form-encoded `POST` to an absolute URI.
    fn post(
        &self,
        uri: &str,
        body: String,
    ) -> impl Future<Output = Result<TransportResponse, Error>> + Send;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Wrap an existing `reqwest` client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Empty (or whitespace-only) bodies decode to `None`.
fn decode_body(bytes: &[u8]) -> Result<Option<serde_json::Value>, Error> {
    if bytes.trim_ascii().is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|e| Error::Deserialization(e.to_string()))
}

impl Transport for HttpTransport {
    async fn get(&self, uri: &str) -> Result<Option<TransportResponse>, Error> {
        let response = self
            .client
            .get(uri)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        debug!(status, len = bytes.len(), "received response");

        let body = decode_body(&bytes)?;
        Ok(Some(TransportResponse { status, body }))
    }

    async fn post(&self, uri: &str, body: String) -> Result<TransportResponse, Error> {
        let response = self
            .client
            .post(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        debug!(status, len = bytes.len(), "received action response");

        // Actions are judged on status alone; an error body is kept only if
        // it happens to be JSON.
        let body = decode_body(&bytes).ok().flatten();

        Ok(TransportResponse { status, body })
    }
}
