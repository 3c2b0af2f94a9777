//! Static reference data: indices and their constituent securities.
//!
//! Indices are loaded from YAML (embedded at compile time, or read from a
//! file) and validated before use. They are plain value objects and never
//! go through the quote decoder.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for reference data loading.
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Failed to parse index YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("Failed to read index file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Empty {0}")]
    EmptyField(String),
    #[error("systemicRho for {0} is not a finite number")]
    NonFiniteRho(String),
    #[error("Duplicate index ticker: {0}")]
    DuplicateIndex(String),
    #[error("Duplicate security {ticker} in index {index}")]
    DuplicateSecurity { index: String, ticker: String },
}

/// Top-level structure for the index YAML file.
#[derive(Deserialize, Debug)]
pub struct IndexFile {
    pub indices: Vec<Index>,
}

/// A named group of securities, e.g. a market index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Index {
    pub name: String,
    pub ticker: String,
    /// Constituents, in file order.
    pub securities: Vec<Security>,
}

/// One constituent of an [`Index`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub name: String,
    pub ticker: String,
    /// Dimensionless risk coefficient. No range is enforced.
    pub systemic_rho: f64,
}

/// Parse and validate indices from YAML content.
///
/// # Returns
/// * `Ok(Vec<Index>)` - Indices in file order
/// * `Err(ReferenceError)` - Parse error, empty name/ticker, non-finite rho, or duplicate ticker
pub fn parse_indices(yaml_content: &str) -> Result<Vec<Index>, ReferenceError> {
    let file: IndexFile = serde_yml::from_str(yaml_content)?;

    let mut seen_indices = HashSet::new();
    for index in &file.indices {
        validate_index(index)?;
        if !seen_indices.insert(index.ticker.as_str()) {
            return Err(ReferenceError::DuplicateIndex(index.ticker.clone()));
        }
    }

    Ok(file.indices)
}

fn validate_index(index: &Index) -> Result<(), ReferenceError> {
    if index.name.trim().is_empty() {
        return Err(ReferenceError::EmptyField("index name".to_string()));
    }
    if index.ticker.trim().is_empty() {
        return Err(ReferenceError::EmptyField(format!(
            "ticker for index {}",
            index.name
        )));
    }

    let mut seen = HashSet::new();
    for security in &index.securities {
        if security.name.trim().is_empty() || security.ticker.trim().is_empty() {
            return Err(ReferenceError::EmptyField(format!(
                "security name or ticker in index {}",
                index.ticker
            )));
        }
        if !security.systemic_rho.is_finite() {
            return Err(ReferenceError::NonFiniteRho(security.ticker.clone()));
        }
        if !seen.insert(security.ticker.as_str()) {
            return Err(ReferenceError::DuplicateSecurity {
                index: index.ticker.clone(),
                ticker: security.ticker.clone(),
            });
        }
    }
    Ok(())
}

/// Load indices from the YAML file embedded at compile time.
pub fn load_indices() -> Result<Vec<Index>, ReferenceError> {
    let yaml_content = include_str!("../../seed_data/indices.yml");
    parse_indices(yaml_content)
}

/// Load indices from a YAML file on disk.
pub fn load_indices_from_path(path: &Path) -> Result<Vec<Index>, ReferenceError> {
    let yaml_content = std::fs::read_to_string(path)?;
    parse_indices(&yaml_content)
}

/// Finds an index by ticker (exact match).
pub fn find_index<'a>(indices: &'a [Index], ticker: &str) -> Option<&'a Index> {
    indices.iter().find(|i| i.ticker == ticker)
}
