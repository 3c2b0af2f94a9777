//! Raw payload shapes, keyed exactly as the provider sends them.
//!
//! Values are left untyped here. Conversion into typed values happens in
//! [`super::decode`]. Unknown keys are ignored by serde, so upstream
//! additions (a sixth metadata field, an extra bar column) do not break
//! decoding.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Top-level envelope of a `TIME_SERIES_DAILY` response.
///
/// Both sections are optional so that error-shaped bodies (which carry only
/// `"Error Message"`, `"Note"` or `"Information"`) still deserialize and can
/// be reported as provider errors.
#[derive(Deserialize, Debug, Default)]
pub struct RawDailyResponse {
    #[serde(rename = "Meta Data")]
    pub meta_data: Option<RawMetaData>,

    #[serde(rename = "Time Series (Daily)")]
    pub time_series: Option<BTreeMap<String, RawDailyBar>>,

    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,

    #[serde(rename = "Note")]
    pub note: Option<String>,

    #[serde(rename = "Information")]
    pub information: Option<String>,
}

impl RawDailyResponse {
    /// Returns the provider's own error text, if the body is error-shaped.
    pub fn provider_message(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }
}

/// The `"Meta Data"` object. All five fields are required.
#[derive(Deserialize, Debug, Clone)]
pub struct RawMetaData {
    #[serde(rename = "1. Information")]
    pub information: String,

    #[serde(rename = "2. Symbol")]
    pub symbol: String,

    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: String,

    #[serde(rename = "4. Output Size")]
    pub output_size: String,

    #[serde(rename = "5. Time Zone")]
    pub time_zone: String,
}

/// One entry of the `"Time Series (Daily)"` object.
///
/// Fields are optional and untyped at this stage so a missing or mistyped
/// column can be reported against the date it belongs to instead of failing
/// the whole envelope.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawDailyBar {
    #[serde(rename = "1. open")]
    pub open: Option<Value>,

    #[serde(rename = "2. high")]
    pub high: Option<Value>,

    #[serde(rename = "3. low")]
    pub low: Option<Value>,

    #[serde(rename = "4. close")]
    pub close: Option<Value>,

    #[serde(rename = "5. volume")]
    pub volume: Option<Value>,
}

/// Wire key names, used when reporting which field failed.
pub mod keys {
    pub const META_DATA: &str = "Meta Data";
    pub const TIME_SERIES: &str = "Time Series (Daily)";
    pub const LAST_REFRESHED: &str = "3. Last Refreshed";
    pub const OPEN: &str = "1. open";
    pub const HIGH: &str = "2. high";
    pub const LOW: &str = "3. low";
    pub const CLOSE: &str = "4. close";
    pub const VOLUME: &str = "5. volume";
}
