//! API key resolution.
//!
//! The client never reads the environment itself. It asks a
//! [`CredentialProvider`] for the key at the start of every fetch, so tests
//! and alternate secret stores can be plugged in without touching process
//! state.

use crate::Error;

/// Environment variable read by [`EnvCredential::default`].
pub const DEFAULT_API_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";

/// Source of the provider API key.
pub trait CredentialProvider: Send + Sync {
    /// Returns the key, or [`Error::CredentialUnavailable`] if it is unset or empty.
    fn resolve(&self) -> Result<String, Error>;
}

/// Reads the key from an environment variable on every call.
#[derive(Clone, Debug)]
pub struct EnvCredential {
    var: String,
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_VAR)
    }
}

impl EnvCredential {
    pub fn new(var: &str) -> Self {
        Self {
            var: var.to_string(),
        }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl CredentialProvider for EnvCredential {
    fn resolve(&self) -> Result<String, Error> {
        match std::env::var(&self.var) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(Error::CredentialUnavailable {
                source_name: format!("environment variable {}", self.var),
            }),
        }
    }
}

/// A fixed key, for callers that already hold one.
#[derive(Clone)]
pub struct StaticCredential(String);

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl std::fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticCredential(***)")
    }
}

impl CredentialProvider for StaticCredential {
    fn resolve(&self) -> Result<String, Error> {
        if self.0.trim().is_empty() {
            return Err(Error::CredentialUnavailable {
                source_name: "static credential".to_string(),
            });
        }
        Ok(self.0.clone())
    }
}

/// Any `Fn() -> Option<String>` can act as a provider, e.g. a lookup into a secret manager.
impl<F> CredentialProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn resolve(&self) -> Result<String, Error> {
        match self() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(Error::CredentialUnavailable {
                source_name: "credential function".to_string(),
            }),
        }
    }
}
