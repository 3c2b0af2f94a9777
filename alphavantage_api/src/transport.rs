//! HTTP transport used by [`crate::Client`].
//!
//! The client only needs "GET this URL and hand me the body". That capability
//! is the [`Transport`] trait, so callers choose their own timeouts and
//! connection pooling, and tests can substitute a canned response.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use url::Url;

use crate::errors::BoxError;
use crate::Error;

/// Raw response handed back by a transport. The status is informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Failure reported by a transport.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// The request never produced a response (connect refused, DNS, timeout).
    #[error("request could not be sent: {0}")]
    Send(#[source] BoxError),
    /// A response arrived but its body could not be read in full.
    #[error("response body could not be read: {0}")]
    Read(#[source] BoxError),
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Send(cause) => Error::Transport(cause),
            TransportError::Read(cause) => Error::ResponseRead(cause),
        }
    }
}

/// Issues a single GET and reads the whole body into memory.
pub trait Transport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a Url,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + Send + 'a>>;
}

/// Production transport backed by `reqwest`.
///
/// No timeout is set unless the caller asks for one with [`ReqwestTransport::with_timeout`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a transport whose requests fail with a transport error after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(Box::new(e)))?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a Url,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + Send + 'a>> {
        Box::pin(async move {
            let resp = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| TransportError::Send(Box::new(e)))?;

            let status = resp.status().as_u16();
            let body = resp
                .bytes()
                .await
                .map_err(|e| TransportError::Read(Box::new(e)))?;

            Ok(HttpResponse {
                status,
                body: body.to_vec(),
            })
        })
    }
}
