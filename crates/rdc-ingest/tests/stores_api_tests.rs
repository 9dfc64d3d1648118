//! Integration tests for the store details API client
//!
//! The real API sits behind an API key; these tests run the client against
//! a wiremock server with the same shapes.

use rdc_ingest::http::build_client;
use rdc_ingest::stores::api::{StoreApiClient, API_KEY_HEADER};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_body(index: u32, code: &str) -> serde_json::Value {
    serde_json::json!({
        "index": index,
        "address": "Flat 72W, Sally isle, East Deantown",
        "longitude": "-0.1257",
        "locality": "High Wycombe",
        "store_code": code,
        "staff_numbers": "34",
        "opening_date": "1996-10-25",
        "store_type": "Local",
        "latitude": "51.5085",
        "country_code": "GB",
        "continent": "Europe"
    })
}

fn client_for(server: &MockServer) -> StoreApiClient {
    StoreApiClient::new(
        build_client(5).unwrap(),
        server.uri(),
        "test-key".to_string(),
    )
}

#[tokio::test]
async fn test_number_of_stores_sends_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/number_stores"))
        .and(header(API_KEY_HEADER, "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"number_stores": 451})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.number_of_stores().await.unwrap(), 451);
}

#[tokio::test]
async fn test_number_of_stores_propagates_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/number_stores"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.number_of_stores().await.is_err());
}

#[tokio::test]
async fn test_store_details_deserializes_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/store_details/7"))
        .and(header(API_KEY_HEADER, "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_body(7, "HI-9B97EE4E")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = client.store_details(7).await.unwrap();

    assert_eq!(store.store_code.as_deref(), Some("HI-9B97EE4E"));
    assert_eq!(store.longitude.as_deref(), Some("-0.1257"));
}

#[tokio::test]
async fn test_retrieve_all_skips_failed_stores() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/number_stores"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"number_stores": 3})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/store_details/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_body(1, "BL-8387506C")))
        .mount(&server)
        .await;

    // store 2 is broken upstream
    Mock::given(method("GET"))
        .and(path("/store_details/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/store_details/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_body(3, "HI-9B97EE4E")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stores = client.retrieve_all().await.unwrap();

    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].store_code.as_deref(), Some("BL-8387506C"));
    assert_eq!(stores[1].store_code.as_deref(), Some("HI-9B97EE4E"));
}
