mod commands;
mod output;

use anyhow::Result;
use avquotes_lib::Settings;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "avquotes")]
#[command(about = "Fetch daily stock prices from Alpha Vantage")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily OHLCV bars for one symbol
    Daily(commands::daily::DailyArgs),
    /// List reference indices or the securities of one index
    Indices(commands::indices::IndicesArgs),
    /// Latest close for every security of an index
    Index(commands::index::IndexArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("avquotes=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    match &cli.command {
        Commands::Daily(args) => {
            let client = Settings::from_env().build_client()?;
            commands::daily::run(args, &client, &format).await?
        }
        Commands::Indices(args) => commands::indices::run(args, &format)?,
        Commands::Index(args) => {
            let client = Settings::from_env().build_client()?;
            commands::index::run(args, &client, &format).await?
        }
    }

    Ok(())
}
