use alphavantage_api::{DailySeriesQuery, Error, Function, OutputSize, Query};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://www.alphavantage.co/query").unwrap()
}

#[test]
fn daily_query_defaults() {
    let query = DailySeriesQuery::new("IBM").unwrap();
    assert_eq!(query.symbol(), "IBM");
    assert_eq!(query.output_size(), OutputSize::Compact);
    assert_eq!(
        query.to_query_string("demo"),
        "function=TIME_SERIES_DAILY&symbol=IBM&outputsize=compact&apikey=demo"
    );
}

#[test]
fn daily_query_parameters_appear_once_in_order() {
    for (symbol, key) in [("AAPL", "k"), ("BRK.B", "abc123"), ("TSCO.LON", "XYZ")] {
        let qs = DailySeriesQuery::new(symbol).unwrap().to_query_string(key);
        assert!(!qs.starts_with('&'));
        assert!(!qs.ends_with('&'));

        let keys: Vec<&str> = qs
            .split('&')
            .map(|pair| pair.split_once('=').unwrap().0)
            .collect();
        assert_eq!(keys, vec!["function", "symbol", "outputsize", "apikey"]);
        assert!(qs.contains(&format!("symbol={}&", symbol)));
        assert!(qs.ends_with(&format!("apikey={}", key)));
    }
}

#[test]
fn daily_query_encodes_reserved_characters() {
    let qs = DailySeriesQuery::new("A&B").unwrap().to_query_string("k=y");
    assert_eq!(qs.matches('&').count(), 3);
    assert!(qs.contains("symbol=A%26B"));
    assert!(qs.ends_with("apikey=k%3Dy"));
}

#[test]
fn daily_query_add_to_url_replaces_existing_query() {
    let url = Url::parse("https://example.com/query?stale=1").unwrap();
    let url = DailySeriesQuery::new("IBM").unwrap().add_to_url(&url, "demo");
    assert_eq!(
        url.as_str(),
        "https://example.com/query?function=TIME_SERIES_DAILY&symbol=IBM&outputsize=compact&apikey=demo"
    );
}

#[test]
fn daily_query_full_output() {
    let url = DailySeriesQuery::new("IBM")
        .unwrap()
        .with_output_size(OutputSize::Full)
        .add_to_url(&base_url(), "demo");
    assert!(url.query().unwrap().contains("outputsize=full"));
}

#[test]
fn empty_symbol_is_rejected() {
    assert!(matches!(DailySeriesQuery::new(""), Err(Error::InvalidSymbol)));
}

#[test]
fn enum_parsing() {
    assert_eq!("compact".parse::<OutputSize>(), Ok(OutputSize::Compact));
    assert_eq!("full".parse::<OutputSize>(), Ok(OutputSize::Full));
    assert!("FULL".parse::<OutputSize>().is_err());
    assert_eq!(
        "TIME_SERIES_DAILY".parse::<Function>(),
        Ok(Function::TimeSeriesDaily)
    );
    assert_eq!(Function::TimeSeriesDaily.to_string(), "TIME_SERIES_DAILY");
}
