use httpmock::prelude::*;
use stock_common::quote::QuoteFetcher;
use stock_common::{net, Config, LookupError};
use url::Url;

fn fetcher(server: &MockServer) -> QuoteFetcher {
    let base = Url::parse(&server.url("/api/v3/quote/")).unwrap();
    let config = Config::new("fmp-key", "news-key").unwrap().with_quote_base(base);
    let client = net::build_client(&config).unwrap();
    QuoteFetcher::new(client, &config)
}

#[test]
fn fetches_first_quote_for_symbol() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/quote/TSLA")
            .query_param("apikey", "fmp-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"name":"Tesla Inc.","price":319.41,"volume":73310775,"pe":175.80}]"#);
    });

    let quote = fetcher(&server).fetch("TSLA").unwrap();
    mock.assert();

    let labels = quote.labels();
    assert_eq!(labels.name, "Name: Tesla Inc.");
    assert_eq!(labels.price, "Price: 319.41");
    assert_eq!(labels.volume, "Volume: 73310775");
    assert_eq!(labels.pe, "PE Ratio: 175.8");
}

#[test]
fn empty_array_reports_symbol() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v3/quote/NOPE");
        then.status(200).body("[]");
    });

    let err = fetcher(&server).fetch("NOPE").unwrap_err();
    mock.assert();
    match err {
        LookupError::QuoteNotFound { symbol, .. } => assert_eq!(symbol, "NOPE"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejected_key_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v3/quote/TSLA");
        then.status(401)
            .body(r#"{"Error Message":"Invalid API KEY. Please retry or visit our documentation."}"#);
    });

    let err = fetcher(&server).fetch("TSLA").unwrap_err();
    match err {
        LookupError::QuoteNotFound { symbol, detail } => {
            assert_eq!(symbol, "TSLA");
            assert!(detail.contains("401"), "{detail}");
            assert!(!detail.contains("fmp-key"), "{detail}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unreachable_endpoint_is_not_found() {
    let config = Config::new("k", "k")
        .unwrap()
        .with_quote_base(Url::parse("http://127.0.0.1:1/api/v3/quote/").unwrap());
    let client = net::build_client(&config).unwrap();
    let err = QuoteFetcher::new(client, &config).fetch("TSLA").unwrap_err();
    assert!(matches!(err, LookupError::QuoteNotFound { .. }));
}
