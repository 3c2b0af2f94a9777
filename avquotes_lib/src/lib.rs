//! Library layer for avquotes: settings, index reference data, input
//! validation and index-wide fetching on top of `alphavantage_api`.

pub mod error;
pub mod fetch;
pub mod reference;
pub mod settings;
pub mod validation;

pub use alphavantage_api;
pub use alphavantage_api::types;
pub use alphavantage_api::{Client, DailySeriesQuery, OutputSize};

pub use error::AvQuotesError;
pub use fetch::{fetch_index, SecurityQuote};
pub use reference::{find_index, load_indices, load_indices_from_path, Index, Security};
pub use settings::Settings;
