//! HTTP client for the Alpha Vantage query endpoint.

use std::sync::Arc;

use url::Url;

use crate::{
    credential::{CredentialProvider, EnvCredential},
    query::{DailySeriesQuery, Query},
    transport::{ReqwestTransport, Transport},
    types::{decode_with_policy, DecodePolicy, Decoded, QuoteSeries},
    Error,
};

/// Alpha Vantage client.
///
/// Each fetch resolves the credential, builds the query, performs one GET
/// through the injected [`Transport`] and decodes the body. Nothing is
/// retried or cached; any deadline belongs to the transport. HTTP status codes are not
/// inspected: the provider answers 200 even for bad requests, so decoding is
/// what decides success. Calls share no mutable state and may run
/// concurrently.
#[derive(Clone)]
pub struct Client {
    /// Base URL for the API. Defaults to `https://www.alphavantage.co`.
    base_api_url: String,
    credentials: Arc<dyn CredentialProvider>,
    transport: Arc<dyn Transport>,
    decode_policy: DecodePolicy,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client for the production API, reading the key from
    /// `ALPHA_VANTAGE_API_KEY` and using a default `reqwest` transport.
    pub fn new() -> Self {
        Self::with_base_url("https://www.alphavantage.co")
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            credentials: Arc::new(EnvCredential::default()),
            transport: Arc::new(ReqwestTransport::new()),
            decode_policy: DecodePolicy::default(),
        }
    }

    /// Like [`Client::with_base_url`] but rejects a base URL that cannot be
    /// parsed, so configuration mistakes surface before the first fetch.
    pub fn try_with_base_url(base_url: &str) -> Result<Self, Error> {
        let client = Self::with_base_url(base_url);
        client.endpoint()?;
        Ok(client)
    }

    /// Replaces the credential source.
    pub fn credentials(mut self, credentials: impl CredentialProvider + 'static) -> Self {
        self.credentials = Arc::new(credentials);
        self
    }

    /// Replaces the transport.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Sets how a malformed daily bar is handled. Defaults to [`DecodePolicy::Strict`].
    pub fn decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn endpoint(&self) -> Result<Url, Error> {
        Url::parse(format!("{}/query", &self.base_api_url).as_str()).map_err(|source| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, source);
            Error::InvalidBaseUrl {
                url: self.base_api_url.clone(),
                source,
            }
        })
    }

    fn get_url(&self, query: &impl Query, api_key: &str) -> Result<Url, Error> {
        let url = self.endpoint()?;
        Ok(query.add_to_url(&url, api_key))
    }

    async fn get(&self, query: &impl Query, api_key: &str) -> Result<Decoded, Error> {
        let url = self.get_url(query, api_key)?;
        tracing::debug!("GET {}", redacted(&url));

        let resp = self.transport.get(&url).await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::from(e)
        })?;
        tracing::debug!("Received {} bytes (status {})", resp.body.len(), resp.status);

        decode_with_policy(&resp.body, self.decode_policy).map_err(|e| {
            match &e {
                Error::Provider { message } => {
                    tracing::warn!("Provider rejected request: {}", message)
                }
                _ => tracing::error!(
                    "Failed to parse resource: {} | body: {}",
                    e,
                    truncate_body(&resp.body)
                ),
            }
            e
        })
    }

    /// Fetches the compact daily series for a symbol.
    ///
    /// The credential is resolved before anything else; if it is missing no
    /// request is sent.
    pub async fn fetch_daily_series(&self, symbol: &str) -> Result<QuoteSeries, Error> {
        let api_key = self.credentials.resolve()?;
        let query = DailySeriesQuery::new(symbol)?;
        let decoded = self.get(&query, &api_key).await?;
        Ok(decoded.series)
    }

    /// Fetches a daily series for an explicit query, returning any bars
    /// skipped under [`DecodePolicy::SkipInvalid`] alongside the series.
    pub async fn fetch_daily_series_with(&self, query: &DailySeriesQuery) -> Result<Decoded, Error> {
        let api_key = self.credentials.resolve()?;
        self.get(query, &api_key).await
    }
}

/// The request URL with the `apikey` value masked, for logging.
fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX {
        text.into_owned()
    } else {
        let mut end = MAX;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &text[..end])
    }
}
