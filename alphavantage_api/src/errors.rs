//! Error types for the API client.

/// Boxed cause carried by transport-level failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when fetching a daily series.
///
/// Every fetch either returns a complete series or exactly one of these.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The credential source was not configured or held an empty value.
    /// No request is sent when this is returned.
    #[error("API credential unavailable from {source_name}")]
    CredentialUnavailable { source_name: String },
    /// The symbol passed to the query builder was empty.
    #[error("Symbol must not be empty")]
    InvalidSymbol,
    /// The configured base URL is not an absolute URL. No request is sent.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The request could not reach the provider (connect, DNS, timeout).
    #[error("Request failed: {0}")]
    Transport(#[source] BoxError),
    /// The connection succeeded but the response body could not be read.
    #[error("Failed to read response body: {0}")]
    ResponseRead(#[source] BoxError),
    /// The payload did not match the expected schema.
    #[error("Failed to decode response: {0}")]
    SchemaDecode(#[from] DecodeError),
    /// The provider answered with an error-shaped body instead of a series
    /// (invalid symbol, rate limit notice, bad API key).
    #[error("Provider returned an error: {message}")]
    Provider { message: String },
}

/// Describes which part of the payload failed to decode.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The payload is not valid JSON or does not have the expected shape.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),
    /// A required top-level section is absent.
    #[error("missing field \"{field}\"")]
    MissingField { field: &'static str },
    /// A date field is not in `YYYY-MM-DD` form.
    #[error("invalid date in \"{field}\": {value:?}")]
    InvalidDate { field: &'static str, value: String },
    /// One daily record lacks a required field.
    #[error("missing \"{field}\" for {date}")]
    MissingBarField { date: String, field: &'static str },
    /// One daily record has a field that could not be converted.
    #[error("invalid \"{field}\" for {date}: {value:?}")]
    InvalidBar {
        date: String,
        field: &'static str,
        value: String,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedJson(e.to_string())
    }
}
