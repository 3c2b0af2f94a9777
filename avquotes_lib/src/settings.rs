//! Runtime settings read from the environment.
//!
//! The API key itself is not read here. The client resolves it through
//! [`EnvCredential`] on every fetch, so a missing key surfaces as
//! `CredentialUnavailable` from the fetch rather than at startup.

use std::time::Duration;

use alphavantage_api::credential::DEFAULT_API_KEY_VAR;
use alphavantage_api::types::DecodePolicy;
use alphavantage_api::{Client, EnvCredential, ReqwestTransport};

use crate::error::AvQuotesError;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration. Build with [`Settings::from_env`] or [`Settings::default`].
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Environment variable holding the API key.
    pub api_key_var: String,
    pub base_url: String,
    /// Deadline applied to the HTTP transport.
    pub timeout: Duration,
    pub decode_policy: DecodePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            decode_policy: DecodePolicy::default(),
        }
    }
}

impl Settings {
    /// Reads `ALPHA_VANTAGE_BASE_URL`, `ALPHA_VANTAGE_TIMEOUT_SECS` and
    /// `ALPHA_VANTAGE_DECODE_POLICY`. Unset or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = lookup("ALPHA_VANTAGE_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.base_url);

        let timeout = lookup("ALPHA_VANTAGE_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let decode_policy = match lookup("ALPHA_VANTAGE_DECODE_POLICY") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Unknown decode policy '{}', using strict", raw);
                DecodePolicy::Strict
            }),
            None => defaults.decode_policy,
        };

        Self {
            api_key_var: defaults.api_key_var,
            base_url,
            timeout,
            decode_policy,
        }
    }

    /// Builds a client with an environment credential and a `reqwest`
    /// transport bounded by [`Settings::timeout`]. A base URL that does not
    /// parse is rejected here rather than on the first fetch.
    pub fn build_client(&self) -> Result<Client, AvQuotesError> {
        let transport = ReqwestTransport::with_timeout(self.timeout)?;
        Ok(Client::try_with_base_url(&self.base_url)?
            .credentials(EnvCredential::new(&self.api_key_var))
            .transport(transport)
            .decode_policy(self.decode_policy))
    }
}
