//! Client for the Alpha Vantage `TIME_SERIES_DAILY` endpoint.
//!
//! Builds the query, fetches the payload through an injectable transport and
//! decodes the provider's string-encoded schema into [`types::QuoteSeries`].

mod client;
pub mod credential;
mod errors;
mod query;
pub mod transport;
pub mod types;
pub use self::client::Client;
pub use self::credential::{CredentialProvider, EnvCredential, StaticCredential};
pub use self::errors::{BoxError, DecodeError, Error};
pub use self::query::{DailySeriesQuery, Function, OutputSize, Query};
pub use self::transport::{HttpResponse, ReqwestTransport, Transport, TransportError};
