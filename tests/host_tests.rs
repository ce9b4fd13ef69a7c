use nagiosxi::{Client, Envelope, Host, ToParams};
use std::env;

/// Build a client from the NAGIOS_URL and NAGIOS_API_TOKEN environment
/// variables. Live tests are ignored by default; run them with:
/// cargo test --test host_tests -- --ignored
fn live_client() -> Client {
    let url = env::var("NAGIOS_URL").expect("NAGIOS_URL environment variable must be set");
    let token =
        env::var("NAGIOS_API_TOKEN").expect("NAGIOS_API_TOKEN environment variable must be set");
    Client::new(&url, &token).with_debug(true)
}

fn test_host(name: &str) -> Host {
    Host {
        host_name: name.to_string(),
        alias: name.to_string(),
        address: "127.0.0.1".to_string(),
        max_check_attempts: "5".to_string(),
        check_period: "24x7".to_string(),
        notification_interval: "10".to_string(),
        notification_period: "24x7".to_string(),
        contacts: Some(vec!["nagiosadmin".to_string()]),
        templates: Some(vec!["generic-host".to_string()]),
        ..Host::default()
    }
}

#[test]
#[ignore]
fn test_create_host() {
    let client = live_client();

    let body = client.create_host(&test_host("host1")).expect("failed to create host");

    let envelope: Envelope =
        serde_json::from_slice(&body).expect("create response was not an envelope");
    assert!(
        !envelope.success.is_empty(),
        "expected a success message, got: {}",
        String::from_utf8_lossy(&body)
    );
}

#[test]
#[ignore]
fn test_get_host() {
    let client = live_client();

    let host = client.get_host("host1").expect("failed to get host");

    assert_eq!(host.host_name, "host1");
    assert_eq!(host.address, "127.0.0.1");
}

#[test]
#[ignore]
fn test_get_host_not_found() {
    let client = live_client();

    let err = client
        .get_host("no-such-host-634292")
        .expect_err("expected a not-found error");

    assert!(err.is_not_found(), "expected NotFound, got {:?}", err);
}

#[test]
#[ignore]
fn test_update_host() {
    let client = live_client();

    // Rename host1 to host2, addressing it by its current name
    let mut updated = test_host("host2");
    updated.notification_interval = "15".to_string();

    client.update_host(&updated, "host1").expect("failed to update host");

    let host = client.get_host("host2").expect("failed to get renamed host");
    assert_eq!(host.notification_interval, "15");
}

#[test]
#[ignore]
fn test_delete_host() {
    let client = live_client();

    client.delete_host("host2").expect("failed to delete host");

    let err = client
        .get_host("host2")
        .expect_err("host should be gone after delete");
    assert!(err.is_not_found(), "expected NotFound, got {:?}", err);
}

// The remaining tests exercise parsing only and run without a server.

#[test]
fn test_create_parameters_present() {
    let params = test_host("host1").to_params();
    let encoded = params.encode();

    for pair in [
        "host_name=host1",
        "address=127.0.0.1",
        "contacts=nagiosadmin",
        "use=generic-host",
        "max_check_attempts=5",
        "check_period=24x7",
    ] {
        assert!(encoded.contains(pair), "missing {} in {}", pair, encoded);
    }
}

#[test]
fn test_host_list_response_parsing() {
    let body = br#"[{"host_name": "host1", "address": "127.0.0.1"}]"#;

    let hosts: Vec<Host> = serde_json::from_slice(body).expect("failed to parse host list");
    assert_eq!(hosts[0].host_name, "host1");

    let empty: Vec<Host> = serde_json::from_slice(b"[]").expect("failed to parse empty list");
    assert!(empty.is_empty());
}

#[test]
fn test_error_envelope_parsing() {
    let body = br#"{"error": "Object not found"}"#;

    let envelope: Envelope = serde_json::from_slice(body).unwrap();
    assert_eq!(envelope.error, "Object not found");
    assert!(envelope.success.is_empty());
}
