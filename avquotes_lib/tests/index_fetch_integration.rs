use avquotes_lib::alphavantage_api::{Error, StaticCredential};
use avquotes_lib::reference::parse_indices;
use avquotes_lib::{fetch_index, AvQuotesError, Client, Index, Settings};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn daily_body(symbol: &str, close: &str) -> String {
    format!(
        r#"{{
    "Meta Data": {{
        "1. Information": "Daily Prices (open, high, low, close) and Volumes",
        "2. Symbol": "{symbol}",
        "3. Last Refreshed": "2024-12-20",
        "4. Output Size": "Compact",
        "5. Time Zone": "US/Eastern"
    }},
    "Time Series (Daily)": {{
        "2024-12-20": {{"1. open": "10.00", "2. high": "11.00", "3. low": "9.50", "4. close": "{close}", "5. volume": "1200"}},
        "2024-12-19": {{"1. open": "9.80", "2. high": "10.20", "3. low": "9.40", "4. close": "10.00", "5. volume": "900"}}
    }}
}}"#
    )
}

fn test_index() -> Index {
    let yaml = r#"
indices:
  - name: Test Index
    ticker: TST
    securities:
      - { name: Alpha Corp, ticker: ALPH, systemicRho: 0.9 }
      - { name: Bogus Inc, ticker: BOGUS, systemicRho: 1.1 }
      - { name: Gamma Ltd, ticker: GAMA, systemicRho: 1.3 }
"#;
    parse_indices(yaml).unwrap().remove(0)
}

async fn mount_symbol(server: &MockServer, symbol: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("symbol", symbol))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_index_collects_per_security_results() {
    let server = MockServer::start().await;
    mount_symbol(&server, "ALPH", daily_body("ALPH", "10.50")).await;
    mount_symbol(
        &server,
        "BOGUS",
        r#"{"Error Message": "Invalid API call."}"#.to_string(),
    )
    .await;
    mount_symbol(&server, "GAMA", daily_body("GAMA", "12.25")).await;

    let client = Client::with_base_url(&server.uri()).credentials(StaticCredential::new("demo"));
    let index = test_index();
    let quotes = fetch_index(&client, &index).await.unwrap();

    assert_eq!(quotes.len(), 3);
    let tickers: Vec<&str> = quotes.iter().map(|q| q.security.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["ALPH", "BOGUS", "GAMA"]);

    let (date, bar) = quotes[0].latest_bar().unwrap();
    assert_eq!(date.to_string(), "2024-12-20");
    assert_eq!(bar.close, 10.5);

    assert!(matches!(quotes[1].result, Err(Error::Provider { .. })));
    assert!(quotes[1].latest_bar().is_none());

    assert_eq!(quotes[2].latest_bar().unwrap().1.close, 12.25);
}

#[tokio::test]
async fn fetch_index_aborts_without_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(daily_body("ALPH", "1")))
        .expect(0)
        .mount(&server)
        .await;

    let client =
        Client::with_base_url(&server.uri()).credentials(|| -> Option<String> { None });
    let index = test_index();
    let result = fetch_index(&client, &index).await;

    assert!(matches!(
        result,
        Err(AvQuotesError::Api(Error::CredentialUnavailable { .. }))
    ));
}

#[tokio::test]
async fn settings_client_fetches_from_configured_base_url() {
    let server = MockServer::start().await;
    mount_symbol(&server, "ALPH", daily_body("ALPH", "10.50")).await;

    std::env::set_var("AVQ_LIB_TEST_KEY", "from-env");
    let settings = Settings {
        api_key_var: "AVQ_LIB_TEST_KEY".to_string(),
        base_url: server.uri(),
        ..Settings::default()
    };
    let client = settings.build_client().unwrap();
    let series = client.fetch_daily_series("ALPH").await.unwrap();
    assert_eq!(series.meta_data.symbol, "ALPH");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().unwrap().ends_with("apikey=from-env"));
}
