use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use super::*;

fn test_client(base_url: &str) -> KrogerClient {
    KrogerClient::new(base_url, "test-id", "test-secret", "FRED")
        .expect("client construction should not fail")
}

fn header<'a>(request: &'a Request, name: reqwest::header::HeaderName) -> &'a str {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[test]
fn new_rejects_each_empty_argument() {
    let cases = [
        ("", "id", "secret", "FRED", "baseUrl"),
        ("https://api.kroger.com/v1", "", "secret", "FRED", "id"),
        ("https://api.kroger.com/v1", "id", "", "FRED", "secret"),
        ("https://api.kroger.com/v1", "id", "secret", "", "chain"),
    ];
    for (base_url, id, secret, chain, param) in cases {
        let err = KrogerClient::new(base_url, id, secret, chain).unwrap_err();
        assert!(err.is_validation(), "expected Validation, got: {err:?}");
        assert_eq!(err.to_string(), format!("parameter '{param}' is required"));
    }
}

#[test]
fn new_accepts_unparsable_base_url() {
    let client = KrogerClient::new("badUrl", "id", "secret", "FRED");
    assert!(client.is_ok());
}

#[test]
fn new_client_has_no_token() {
    assert!(!test_client("https://api.kroger.com/v1").has_token());
}

#[test]
fn debug_output_redacts_credentials() {
    let mut client = test_client("https://api.kroger.com/v1");
    client.token = Some("super-secret-token".to_string());
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("test-secret"), "secret leaked: {rendered}");
    assert!(!rendered.contains("super-secret-token"), "token leaked: {rendered}");
}

#[test]
fn token_request_uses_basic_auth_and_form_body() {
    let client = test_client("https://api.kroger.com/v1");
    let request = client.token_request().unwrap();

    assert_eq!(request.method(), reqwest::Method::POST);
    assert_eq!(
        request.url().as_str(),
        "https://api.kroger.com/v1/connect/oauth2/token"
    );
    assert_eq!(
        header(&request, AUTHORIZATION),
        "Basic dGVzdC1pZDp0ZXN0LXNlY3JldA=="
    );
    assert_eq!(
        header(&request, CONTENT_TYPE),
        "application/x-www-form-urlencoded"
    );
    assert_eq!(
        request.body().and_then(reqwest::Body::as_bytes),
        Some(&b"grant_type=client_credentials&scope=product.compact"[..])
    );
}

#[test]
fn token_request_fails_on_malformed_base_url() {
    let client = test_client("badUrl");
    let err = client.token_request().unwrap_err();
    assert!(
        matches!(err, KrogerError::Transport(_)),
        "expected Transport, got: {err:?}"
    );
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = test_client("https://api.kroger.com/v1/");
    let request = client.locations_request("tok", "97224", 0).unwrap();
    assert_eq!(
        request.url().as_str(),
        "https://api.kroger.com/v1/locations?filter.chain=FRED&filter.zipCode.near=97224"
    );
}

#[test]
fn locations_request_appends_limit_only_when_positive() {
    let client = test_client("https://api.kroger.com/v1");
    let request = client.locations_request("tok", "97224", 10).unwrap();
    assert_eq!(
        request.url().as_str(),
        "https://api.kroger.com/v1/locations?filter.chain=FRED&filter.zipCode.near=97224&filter.limit=10"
    );
    assert_eq!(header(&request, AUTHORIZATION), "Bearer tok");
    assert_eq!(header(&request, ACCEPT), "application/json");
}

#[test]
fn products_request_with_term_only() {
    let client = test_client("https://api.kroger.com/v1");
    let request = client.products_request("tok", "milk", None, 0, 0).unwrap();
    assert_eq!(
        request.url().as_str(),
        "https://api.kroger.com/v1/products?filter.term=milk"
    );
}

#[test]
fn products_request_orders_optional_params() {
    let client = test_client("https://api.kroger.com/v1");
    let request = client
        .products_request("tok", "milk", Some("70100070"), 25, 50)
        .unwrap();
    assert_eq!(
        request.url().as_str(),
        "https://api.kroger.com/v1/products?filter.term=milk&filter.locationId=70100070&filter.start=25&filter.limit=50"
    );
}

#[test]
fn products_request_skips_empty_location_id() {
    let client = test_client("https://api.kroger.com/v1");
    let request = client.products_request("tok", "milk", Some(""), 0, 5).unwrap();
    assert_eq!(
        request.url().as_str(),
        "https://api.kroger.com/v1/products?filter.term=milk&filter.limit=5"
    );
}

#[test]
fn products_request_encodes_special_characters() {
    let client = test_client("https://api.kroger.com/v1");
    let request = client
        .products_request("tok", "mac & cheese", None, 0, 0)
        .unwrap();
    assert!(
        request.url().as_str().ends_with("filter.term=mac+%26+cheese"),
        "term should be form-encoded: {}",
        request.url()
    );
}

#[tokio::test]
async fn queries_without_token_fail_before_validation() {
    let client = test_client("https://api.kroger.com/v1");

    let err = client.get_locations("bogus", 9999).await.unwrap_err();
    assert_eq!(err.to_string(), NO_TOKEN_MESSAGE);

    let err = client.get_products("", None, -1, -1).await.unwrap_err();
    assert_eq!(err.to_string(), NO_TOKEN_MESSAGE);
}

#[tokio::test]
async fn empty_stored_token_counts_as_missing() {
    let mut client = test_client("https://api.kroger.com/v1");
    client.token = Some(String::new());
    assert!(!client.has_token());
    let err = client.get_locations("97224", 0).await.unwrap_err();
    assert!(err.is_validation());
}
