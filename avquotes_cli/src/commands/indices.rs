use std::path::PathBuf;

use anyhow::{bail, Result};
use avquotes_lib::{find_index, load_indices, load_indices_from_path, Index};
use clap::Args;

use crate::output::{build_index_rows, build_security_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct IndicesArgs {
    /// Show the constituents of a single index (e.g. DJI)
    #[arg(long)]
    pub ticker: Option<String>,

    /// Read index definitions from a YAML file instead of the built-in set
    #[arg(long)]
    pub indices: Option<PathBuf>,
}

/// Loads the built-in index set or the one at `path`.
pub fn load(path: Option<&PathBuf>) -> Result<Vec<Index>> {
    let indices = match path {
        Some(p) => load_indices_from_path(p)?,
        None => load_indices()?,
    };
    Ok(indices)
}

pub fn run(args: &IndicesArgs, format: &OutputFormat) -> Result<()> {
    let indices = load(args.indices.as_ref())?;

    let Some(ticker) = &args.ticker else {
        match format {
            OutputFormat::Json => print_json(&indices),
            _ => print_rows(&build_index_rows(&indices), format)?,
        }
        return Ok(());
    };

    let Some(index) = find_index(&indices, ticker) else {
        bail!("unknown index '{}'", ticker);
    };
    match format {
        OutputFormat::Json => print_json(index),
        _ => print_rows(&build_security_rows(index), format)?,
    }
    Ok(())
}
