//! Fetching quotes for every constituent of an index.

use alphavantage_api::types::{DailyBar, QuoteSeries};
use alphavantage_api::Client;
use chrono::NaiveDate;

use crate::error::AvQuotesError;
use crate::reference::{Index, Security};

/// Outcome of fetching one security of an index.
#[derive(Debug)]
pub struct SecurityQuote<'a> {
    pub security: &'a Security,
    pub result: Result<QuoteSeries, alphavantage_api::Error>,
}

impl SecurityQuote<'_> {
    /// Most recent bar, if the fetch succeeded and returned any bars.
    pub fn latest_bar(&self) -> Option<(NaiveDate, &DailyBar)> {
        self.result.as_ref().ok().and_then(|s| s.latest())
    }
}

/// Fetches the daily series of each security in `index`, one at a time and
/// in index order.
///
/// A failure for one security is recorded in its [`SecurityQuote`] and does
/// not stop the others. A missing credential is the exception: it would fail
/// every call the same way, so it aborts the whole run before any request.
pub async fn fetch_index<'a>(
    client: &Client,
    index: &'a Index,
) -> Result<Vec<SecurityQuote<'a>>, AvQuotesError> {
    let mut quotes = Vec::with_capacity(index.securities.len());

    for security in &index.securities {
        tracing::info!("Fetching {} ({})", security.ticker, index.ticker);
        let result = client.fetch_daily_series(&security.ticker).await;

        match result {
            Err(e @ alphavantage_api::Error::CredentialUnavailable { .. }) => {
                return Err(e.into());
            }
            Err(ref e) => {
                tracing::warn!("Failed to fetch {}: {}", security.ticker, e);
            }
            Ok(_) => {}
        }
        quotes.push(SecurityQuote { security, result });
    }

    Ok(quotes)
}
