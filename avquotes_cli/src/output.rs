use anyhow::Result;
use avquotes_lib::types::QuoteSeries;
use avquotes_lib::{Index, SecurityQuote};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct BarRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Open")]
    #[serde(rename = "Open")]
    pub open: String,
    #[tabled(rename = "High")]
    #[serde(rename = "High")]
    pub high: String,
    #[tabled(rename = "Low")]
    #[serde(rename = "Low")]
    pub low: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    pub close: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    pub volume: String,
}

#[derive(Tabled, Serialize)]
pub struct IndexRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Securities")]
    #[serde(rename = "Securities")]
    pub securities: usize,
}

#[derive(Tabled, Serialize)]
pub struct SecurityRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Systemic Rho")]
    #[serde(rename = "Systemic Rho")]
    pub systemic_rho: f64,
}

#[derive(Tabled, Serialize)]
pub struct IndexQuoteRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Systemic Rho")]
    #[serde(rename = "Systemic Rho")]
    pub systemic_rho: f64,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    pub close: String,
    #[tabled(rename = "Change")]
    #[serde(rename = "Change")]
    pub change: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    pub status: String,
}

// -- Row builders --

/// Bars newest first, capped at `limit` when given.
pub fn build_bar_rows(series: &QuoteSeries, limit: Option<usize>) -> Vec<BarRow> {
    series
        .newest_first()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(date, bar)| BarRow {
            date: date.to_string(),
            open: format_price(bar.open),
            high: format_price(bar.high),
            low: format_price(bar.low),
            close: format_price(bar.close),
            volume: format_volume(bar.volume),
        })
        .collect()
}

pub fn build_index_rows(indices: &[Index]) -> Vec<IndexRow> {
    indices
        .iter()
        .map(|i| IndexRow {
            ticker: i.ticker.clone(),
            name: i.name.clone(),
            securities: i.securities.len(),
        })
        .collect()
}

pub fn build_security_rows(index: &Index) -> Vec<SecurityRow> {
    index
        .securities
        .iter()
        .map(|s| SecurityRow {
            ticker: s.ticker.clone(),
            name: s.name.clone(),
            systemic_rho: s.systemic_rho,
        })
        .collect()
}

pub fn build_index_quote_rows(quotes: &[SecurityQuote<'_>]) -> Vec<IndexQuoteRow> {
    quotes
        .iter()
        .map(|q| {
            let latest = q.latest_bar();
            IndexQuoteRow {
                ticker: q.security.ticker.clone(),
                name: q.security.name.clone(),
                systemic_rho: q.security.systemic_rho,
                date: latest.map(|(d, _)| d.to_string()).unwrap_or_default(),
                close: latest.map(|(_, b)| format_price(b.close)).unwrap_or_default(),
                change: latest
                    .map(|(_, b)| format!("{:+.2}", b.change()))
                    .unwrap_or_default(),
                status: match &q.result {
                    Ok(s) if s.is_empty() => "no data".to_string(),
                    Ok(_) => "ok".to_string(),
                    Err(e) => e.to_string(),
                },
            }
        })
        .collect()
}

// -- Rendering --

pub fn print_rows<T: Tabled + Serialize>(rows: &[T], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

fn print_csv<T: Serialize>(rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

fn format_volume(value: i64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avquotes_lib::types::decode_daily_series;
    use avquotes_lib::alphavantage_api::Error;
    use avquotes_lib::reference::parse_indices;

    fn load_series_fixture() -> QuoteSeries {
        let json_str = include_str!("../../alphavantage_api/tests/fixtures/daily_ibm.json");
        decode_daily_series(json_str.as_bytes()).unwrap()
    }

    fn load_test_index() -> Index {
        let yaml = r#"
indices:
  - name: Test Index
    ticker: TST
    securities:
      - { name: International Business Machines, ticker: IBM, systemicRho: 0.71 }
      - { name: Missing Co, ticker: MISS, systemicRho: 1.5 }
"#;
        parse_indices(yaml).unwrap().remove(0)
    }

    // -- format tests --

    #[test]
    fn test_format_volume_millions() {
        assert_eq!(format_volume(11_040_541), "11.0M");
    }

    #[test]
    fn test_format_volume_thousands() {
        assert_eq!(format_volume(4_500), "4.5K");
    }

    #[test]
    fn test_format_volume_small() {
        assert_eq!(format_volume(500), "500");
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(223.36), "223.36");
        assert_eq!(format_price(100.0), "100.00");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("anything"), OutputFormat::Table);
    }

    // -- Row builder tests --

    #[test]
    fn test_build_bar_rows_newest_first() {
        let series = load_series_fixture();
        let rows = build_bar_rows(&series, None);
        assert_eq!(rows.len(), 3);

        let row = &rows[0];
        assert_eq!(row.date, "2024-12-20");
        assert_eq!(row.open, "219.75");
        assert_eq!(row.high, "226.00");
        assert_eq!(row.low, "218.12");
        assert_eq!(row.close, "223.36");
        assert_eq!(row.volume, "11.0M");
        assert_eq!(rows[2].date, "2024-12-18");
    }

    #[test]
    fn test_build_bar_rows_limit() {
        let series = load_series_fixture();
        let rows = build_bar_rows(&series, Some(2));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].date, "2024-12-19");
    }

    #[test]
    fn test_build_index_and_security_rows() {
        let index = load_test_index();
        let rows = build_index_rows(std::slice::from_ref(&index));
        assert_eq!(rows[0].ticker, "TST");
        assert_eq!(rows[0].securities, 2);

        let rows = build_security_rows(&index);
        assert_eq!(rows[1].ticker, "MISS");
        assert_eq!(rows[1].systemic_rho, 1.5);
    }

    #[test]
    fn test_build_index_quote_rows() {
        let index = load_test_index();
        let quotes = vec![
            SecurityQuote {
                security: &index.securities[0],
                result: Ok(load_series_fixture()),
            },
            SecurityQuote {
                security: &index.securities[1],
                result: Err(Error::Provider {
                    message: "Invalid API call.".to_string(),
                }),
            },
        ];
        let rows = build_index_quote_rows(&quotes);

        assert_eq!(rows[0].date, "2024-12-20");
        assert_eq!(rows[0].close, "223.36");
        assert_eq!(rows[0].change, "+3.61");
        assert_eq!(rows[0].status, "ok");

        assert_eq!(rows[1].close, "");
        assert!(rows[1].status.contains("Invalid API call."));
    }

    #[test]
    fn test_bar_rows_csv_headers() {
        let series = load_series_fixture();
        let rows = build_bar_rows(&series, Some(1));
        let mut wtr = csv::Writer::from_writer(vec![]);
        for row in &rows {
            wtr.serialize(row).unwrap();
        }
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Date,Open,High,Low,Close,Volume"));
        assert_eq!(lines.next(), Some("2024-12-20,219.75,226.00,218.12,223.36,11.0M"));
    }
}
