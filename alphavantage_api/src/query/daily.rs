use std::str::FromStr;

use crate::Error;

use super::{common::Function, Query};

/// Query for `function=TIME_SERIES_DAILY`.
///
/// The symbol is sent exactly as given; tickers are not case-folded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailySeriesQuery {
    symbol: String,
    output_size: OutputSize,
}

impl DailySeriesQuery {
    /// Creates a compact daily query. Fails with [`Error::InvalidSymbol`] on a blank symbol.
    pub fn new(symbol: &str) -> Result<Self, Error> {
        if symbol.trim().is_empty() {
            return Err(Error::InvalidSymbol);
        }
        Ok(Self {
            symbol: symbol.to_string(),
            output_size: OutputSize::default(),
        })
    }

    pub fn with_output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = output_size;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn output_size(&self) -> OutputSize {
        self.output_size
    }
}

impl Query for DailySeriesQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("function", Function::TimeSeriesDaily.to_string()),
            ("symbol", self.symbol.clone()),
            ("outputsize", self.output_size.to_string()),
        ]
    }
}

/// How many observations to request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputSize {
    /// The latest 100 data points. This is the default.
    #[default]
    Compact,
    /// The full available history.
    Full,
}

impl std::fmt::Display for OutputSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OutputSize::Compact => "compact",
                OutputSize::Full => "full",
            }
        )?;
        Ok(())
    }
}

impl FromStr for OutputSize {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(OutputSize::Compact),
            "full" => Ok(OutputSize::Full),
            _ => Err(()),
        }
    }
}
