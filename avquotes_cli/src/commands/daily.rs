use anyhow::Result;
use avquotes_lib::validation;
use avquotes_lib::{Client, DailySeriesQuery, OutputSize};
use clap::Args;

use crate::output::{build_bar_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct DailyArgs {
    /// Ticker symbol (e.g. IBM, BRK.B, TSCO.LON)
    pub symbol: String,

    /// Request the full history instead of the latest 100 trading days
    #[arg(long)]
    pub full: bool,

    /// Show only the N most recent bars
    #[arg(long)]
    pub limit: Option<usize>,
}

pub async fn run(args: &DailyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let symbol = validation::validate_symbol(&args.symbol)?;
    let limit = args.limit.map(validation::validate_limit).transpose()?;

    let output_size = if args.full {
        OutputSize::Full
    } else {
        OutputSize::Compact
    };
    let query = DailySeriesQuery::new(&symbol)?.with_output_size(output_size);

    let decoded = client.fetch_daily_series_with(&query).await?;
    if !decoded.skipped.is_empty() {
        eprintln!(
            "Skipped {} malformed bar(s) for {}",
            decoded.skipped.len(),
            symbol
        );
    }

    let series = decoded.series;
    match format {
        OutputFormat::Json => print_json(&series),
        _ => {
            let rows = build_bar_rows(&series, limit);
            print_rows(&rows, format)?;
            eprintln!(
                "{} of {} bars for {} (last refreshed {}, {})",
                rows.len(),
                series.len(),
                series.meta_data.symbol,
                series.meta_data.last_refreshed,
                series.meta_data.time_zone
            );
        }
    }

    Ok(())
}
