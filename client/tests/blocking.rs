//! End-to-end tests of the blocking client against the mock KVK server.
//!
//! # Design
//! Starts the mock server on a random port in a background thread, then
//! drives every client operation over real HTTP. The mock echoes what it
//! received, so assertions are on the wire-level request.

use std::sync::Once;

use kvk_client::{
    BasisProfileResource, ClientConfig, Credentials, Error, KvkClient, SearchFilters,
};
use kvk_mock_server::{Echo, UNKNOWN_KVK_NUMBER};

const API_KEY: &str = "test-key";

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Start the mock server and return its base URL.
fn start_server() -> String {
    init_logging();
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            kvk_mock_server::run(listener, API_KEY).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn client(host: &str, api_key: &str) -> KvkClient {
    let credentials = Credentials::new(host, "test/v1", api_key).unwrap();
    KvkClient::new(ClientConfig::new(credentials))
}

fn read_echo(mut response: ureq::http::Response<ureq::Body>) -> Echo {
    assert_eq!(response.status().as_u16(), 200);
    let body = response.body_mut().read_to_string().unwrap();
    serde_json::from_str(&body).unwrap()
}

#[test]
fn every_operation_reaches_the_expected_path() {
    let host = start_server();
    let kvk = client(&host, API_KEY);

    let echo = read_echo(kvk.get_basis_profile("68750110", None, false).unwrap());
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.path, "/test/v1/basisprofielen/68750110");
    assert_eq!(echo.query.get("geoData").map(String::as_str), Some("False"));

    let echo = read_echo(
        kvk.get_basis_profile("68750110", Some(BasisProfileResource::Branches), true)
            .unwrap(),
    );
    assert_eq!(echo.path, "/test/v1/basisprofielen/68750110/vestigingen");
    assert_eq!(echo.query.get("geoData").map(String::as_str), Some("True"));

    let echo = read_echo(kvk.get_branch_profile("000038509504").unwrap());
    assert_eq!(echo.path, "/test/v1/vestigingsprofielen/000038509504");
    assert!(echo.query.is_empty());

    let echo = read_echo(kvk.get_naming("68750110").unwrap());
    assert_eq!(echo.path, "/test/v1/naamgevingen/kvknummer/68750110");

    let filters = SearchFilters::new().trade_name("Acme").city("Amsterdam");
    let echo = read_echo(kvk.search_companies(&filters).unwrap());
    assert_eq!(echo.path, "/test/v1/zoeken");
    assert_eq!(echo.query.len(), 2);
    assert_eq!(echo.query.get("handelsnaam").map(String::as_str), Some("Acme"));
    assert_eq!(echo.query.get("plaats").map(String::as_str), Some("Amsterdam"));
}

#[test]
fn error_statuses_are_returned_raw() {
    let host = start_server();

    let response = client(&host, API_KEY)
        .get_basis_profile(UNKNOWN_KVK_NUMBER, None, false)
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client(&host, "wrong-key").get_naming("68750110").unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

#[test]
fn invalid_search_never_reaches_the_server() {
    // Port 9 is discard; a request reaching the transport would fail with a
    // transport error rather than a validation error.
    let kvk = client("http://127.0.0.1:9", API_KEY);
    let err = kvk
        .search_companies(&SearchFilters::new().house_number_addition("A"))
        .unwrap_err();
    assert!(err.is_validation(), "{err:?}");
}

#[test]
fn connection_failure_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let host = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client(&host, API_KEY).get_naming("68750110").unwrap_err();
    assert!(matches!(err, Error::Blocking(_)), "{err:?}");
}
