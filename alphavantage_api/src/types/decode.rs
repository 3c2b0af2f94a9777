//! Conversion from the raw wire payload into [`QuoteSeries`].
//!
//! Decoding runs in two stages: serde maps the body onto [`RawDailyResponse`]
//! with the provider's keys verbatim, then the metadata and each daily bar are
//! validated and converted independently. Metadata is all-or-nothing. How a
//! bad bar is handled depends on [`DecodePolicy`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value;

use super::series::{DailyBar, Metadata, QuoteSeries};
use super::wire::{keys, RawDailyBar, RawDailyResponse, RawMetaData};
use crate::{errors::DecodeError, Error};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// What to do when a single daily bar fails to convert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Abort the whole decode on the first bad bar. This is the default.
    #[default]
    Strict,
    /// Drop bad bars, log each one and report it in [`Decoded::skipped`].
    SkipInvalid,
}

impl std::str::FromStr for DecodePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(DecodePolicy::Strict),
            "skip-invalid" | "skip" => Ok(DecodePolicy::SkipInvalid),
            _ => Err(()),
        }
    }
}

/// Result of a decode: the series plus any bars dropped under
/// [`DecodePolicy::SkipInvalid`]. `skipped` is always empty under `Strict`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub series: QuoteSeries,
    pub skipped: Vec<DecodeError>,
}

/// Decodes a daily-series payload with [`DecodePolicy::Strict`].
pub fn decode_daily_series(payload: &[u8]) -> Result<QuoteSeries, Error> {
    decode_with_policy(payload, DecodePolicy::Strict).map(|d| d.series)
}

/// Decodes a daily-series payload with the given bar policy.
pub fn decode_with_policy(payload: &[u8], policy: DecodePolicy) -> Result<Decoded, Error> {
    let raw: RawDailyResponse = serde_json::from_slice(payload).map_err(DecodeError::from)?;

    let Some(raw_meta) = raw.meta_data.as_ref() else {
        if let Some(message) = raw.provider_message() {
            return Err(Error::Provider {
                message: message.to_string(),
            });
        }
        return Err(DecodeError::MissingField {
            field: keys::META_DATA,
        }
        .into());
    };
    let meta_data = convert_meta_data(raw_meta)?;

    let raw_series = raw.time_series.ok_or(DecodeError::MissingField {
        field: keys::TIME_SERIES,
    })?;

    let mut bars = BTreeMap::new();
    let mut skipped = Vec::new();
    for (date, raw_bar) in raw_series {
        match convert_entry(&date, &raw_bar) {
            Ok((day, bar)) => {
                bars.insert(day, bar);
            }
            Err(e) if policy == DecodePolicy::SkipInvalid => {
                tracing::warn!("Skipping daily bar: {}", e);
                skipped.push(e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(Decoded {
        series: QuoteSeries::new(meta_data, bars),
        skipped,
    })
}

/// Converts the raw `"Meta Data"` object. Only the refresh date needs parsing.
pub fn convert_meta_data(raw: &RawMetaData) -> Result<Metadata, DecodeError> {
    Ok(Metadata {
        information: raw.information.clone(),
        symbol: raw.symbol.clone(),
        last_refreshed: parse_date(keys::LAST_REFRESHED, &raw.last_refreshed)?,
        output_size: raw.output_size.clone(),
        time_zone: raw.time_zone.clone(),
    })
}

/// Converts one `date -> bar` entry of the time series.
pub fn convert_entry(date: &str, raw: &RawDailyBar) -> Result<(NaiveDate, DailyBar), DecodeError> {
    let day = parse_date(keys::TIME_SERIES, date)?;
    Ok((day, convert_daily_bar(date, raw)?))
}

/// Converts one raw bar. `date` is only used to identify failures.
pub fn convert_daily_bar(date: &str, raw: &RawDailyBar) -> Result<DailyBar, DecodeError> {
    Ok(DailyBar {
        open: parse_price(date, keys::OPEN, raw.open.as_ref())?,
        high: parse_price(date, keys::HIGH, raw.high.as_ref())?,
        low: parse_price(date, keys::LOW, raw.low.as_ref())?,
        close: parse_price(date, keys::CLOSE, raw.close.as_ref())?,
        volume: parse_volume(date, raw.volume.as_ref())?,
    })
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, DecodeError> {
    // chrono tolerates unpadded, signed and space-padded fields; the provider
    // always sends exactly ten characters of digits and dashes.
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| {
            if i == 4 || i == 7 {
                b == b'-'
            } else {
                b.is_ascii_digit()
            }
        });
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) if well_formed => Ok(date),
        _ => Err(DecodeError::InvalidDate {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_price(date: &str, field: &'static str, value: Option<&Value>) -> Result<f64, DecodeError> {
    let text = require_str(date, field, value)?;
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid_bar(date, field, text)),
    }
}

fn parse_volume(date: &str, value: Option<&Value>) -> Result<i64, DecodeError> {
    let text = require_str(date, keys::VOLUME, value)?;
    text.parse::<i64>()
        .map_err(|_| invalid_bar(date, keys::VOLUME, text))
}

/// The provider quotes every bar value; anything other than a JSON string is
/// reported with its JSON rendering.
fn require_str<'a>(
    date: &str,
    field: &'static str,
    value: Option<&'a Value>,
) -> Result<&'a str, DecodeError> {
    match value {
        None => Err(DecodeError::MissingBarField {
            date: date.to_string(),
            field,
        }),
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(other) => Err(invalid_bar(date, field, &other.to_string())),
    }
}

fn invalid_bar(date: &str, field: &'static str, value: &str) -> DecodeError {
    DecodeError::InvalidBar {
        date: date.to_string(),
        field,
        value: value.to_string(),
    }
}
