//! Shared query infrastructure: the [`Query`] trait and the [`Function`] selector.

use std::str::FromStr;

use url::{form_urlencoded, Url};

/// Trait implemented by all query builders. Provides query-string
/// serialization with the credential appended last.
pub trait Query {
    /// Parameters in wire order, without the credential.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Renders `key=value` pairs joined with `&`, ending with `apikey`.
    ///
    /// Values are form-encoded, so the output never carries a leading or
    /// trailing separator and each key appears exactly once.
    fn to_query_string(&self, api_key: &str) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.append_pair("apikey", api_key);
        serializer.finish()
    }

    /// Replaces the query of the given URL with this query, returning the modified URL.
    fn add_to_url(&self, url: &Url, api_key: &str) -> Url {
        let mut url = url.clone();
        url.set_query(Some(&self.to_query_string(api_key)));
        url
    }
}

/// The provider's `function` selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    /// Daily open/high/low/close/volume, unadjusted.
    TimeSeriesDaily,
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Function::TimeSeriesDaily => "TIME_SERIES_DAILY",
            }
        )
    }
}

impl FromStr for Function {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TIME_SERIES_DAILY" => Ok(Function::TimeSeriesDaily),
            _ => Err(()),
        }
    }
}
