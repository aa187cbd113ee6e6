//! End-to-end tests for the balance source against a mocked account API.

use alpaca_balance_adapter::api::build_client;
use alpaca_balance_adapter::credentials::Credentials;
use alpaca_balance_adapter::encode::decode_uint256;
use alpaca_balance_adapter::error::{CredentialsError, SourceError};
use alpaca_balance_adapter::source::fetch_and_encode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn expected_cents(cents: u128) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[16..].copy_from_slice(&cents.to_be_bytes());
    bytes
}

#[tokio::test]
async fn test_fetch_and_encode_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "data": { "portfolio": { "value": 5000.00 } } }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::new("k".into(), "s".into()).unwrap();
    let client = build_client().unwrap();
    let response = fetch_and_encode(&client, &server.uri(), &credentials)
        .await
        .unwrap();

    assert_eq!(response, expected_cents(500000));
    assert_eq!(decode_uint256(&response), Some(500000));
}

#[tokio::test]
async fn test_sequential_invocations_are_identical() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "data": { "portfolio": { "value": 1234.5 } } }),
        ))
        .expect(2)
        .mount(&server)
        .await;

    let credentials = Credentials::new("k".into(), "s".into()).unwrap();
    let client = build_client().unwrap();
    let first = fetch_and_encode(&client, &server.uri(), &credentials)
        .await
        .unwrap();
    let second = fetch_and_encode(&client, &server.uri(), &credentials)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first, expected_cents(123450));
}

#[tokio::test]
async fn test_missing_credentials_perform_no_network_io() {
    // The mock server verifies on drop that nothing was requested.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = Credentials::new("".into(), "s".into());
    assert!(matches!(
        result,
        Err(CredentialsError::MissingCredential("ALPACA_KEY"))
    ));
}

#[tokio::test]
async fn test_negative_balance_fails_the_invocation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "data": { "portfolio": { "value": -5000.00 } } }),
        ))
        .mount(&server)
        .await;

    let credentials = Credentials::new("k".into(), "s".into()).unwrap();
    let client = build_client().unwrap();
    let result = fetch_and_encode(&client, &server.uri(), &credentials).await;
    assert!(matches!(result, Err(SourceError::Fetch(_))));
}
