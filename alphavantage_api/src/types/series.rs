//! Typed daily series returned to callers.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A decoded `TIME_SERIES_DAILY` response.
///
/// Built fresh on every fetch and never mutated afterwards. Bars are keyed by
/// trading date; the map orders them oldest first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSeries {
    pub meta_data: Metadata,
    pub time_series_daily: BTreeMap<NaiveDate, DailyBar>,
}

impl QuoteSeries {
    pub fn new(meta_data: Metadata, time_series_daily: BTreeMap<NaiveDate, DailyBar>) -> Self {
        Self {
            meta_data,
            time_series_daily,
        }
    }

    /// Bar for a given trading date, if present.
    pub fn bar(&self, date: NaiveDate) -> Option<&DailyBar> {
        self.time_series_daily.get(&date)
    }

    /// The most recent bar in the series.
    pub fn latest(&self) -> Option<(NaiveDate, &DailyBar)> {
        self.time_series_daily
            .iter()
            .next_back()
            .map(|(date, bar)| (*date, bar))
    }

    /// Iterates bars newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = (NaiveDate, &DailyBar)> {
        self.time_series_daily
            .iter()
            .rev()
            .map(|(date, bar)| (*date, bar))
    }

    pub fn len(&self) -> usize {
        self.time_series_daily.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_series_daily.is_empty()
    }
}

/// Descriptive envelope from the `"Meta Data"` section.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Free text describing the series, e.g. "Daily Prices (open, high, low, close) and Volumes".
    pub information: String,
    /// Ticker as echoed by the provider.
    pub symbol: String,
    /// Date of the most recent refresh.
    pub last_refreshed: NaiveDate,
    /// "Compact" or "Full Size".
    pub output_size: String,
    /// Exchange time zone label, e.g. "US/Eastern".
    pub time_zone: String,
}

/// One trading day's open/high/low/close/volume.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DailyBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl DailyBar {
    /// Close minus open.
    pub fn change(&self) -> f64 {
        self.close - self.open
    }
}
