use std::path::PathBuf;

use anyhow::{bail, Result};
use avquotes_lib::{fetch_index, find_index, Client};
use clap::Args;

use crate::commands::indices;
use crate::output::{build_index_quote_rows, print_rows, OutputFormat};

#[derive(Args)]
pub struct IndexArgs {
    /// Index ticker (e.g. DJI, NDX)
    pub ticker: String,

    /// Read index definitions from a YAML file instead of the built-in set
    #[arg(long)]
    pub indices: Option<PathBuf>,
}

pub async fn run(args: &IndexArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let all = indices::load(args.indices.as_ref())?;
    let Some(index) = find_index(&all, &args.ticker) else {
        bail!("unknown index '{}'", args.ticker);
    };

    eprintln!(
        "Fetching {} securities of {} ({})",
        index.securities.len(),
        index.name,
        index.ticker
    );
    let quotes = fetch_index(client, index).await?;

    let rows = build_index_quote_rows(&quotes);
    print_rows(&rows, format)?;

    let failed = quotes.iter().filter(|q| q.result.is_err()).count();
    if failed > 0 {
        eprintln!("{} of {} securities failed", failed, quotes.len());
    }
    Ok(())
}
