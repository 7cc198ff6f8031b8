use gtm_client::{GtmClient, GtmError, MalformedInput, NoAuth, NullFieldSchema};
use serde_json::json;
use std::collections::BTreeSet;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOMAIN: &str = "example.akadns.net";

/// Helper to create a client against the mock server
fn create_test_client(server: &MockServer) -> GtmClient {
    GtmClient::new(server.uri(), NoAuth).expect("Failed to create client")
}

async fn mount_domain(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/config-gtm/v1/domains/{}", DOMAIN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn names(fields: &[&str]) -> BTreeSet<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

/// Test the documented datacenter scenario end to end
#[tokio::test]
async fn test_null_field_map_datacenters() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    mount_domain(
        &server,
        json!({
            "name": null,
            "datacenters": [
                {"datacenterId": 1, "city": null},
                {"datacenterId": 2, "city": "NYC"}
            ]
        }),
    )
    .await;

    let client = create_test_client(&server);
    let map = client.domains().null_field_map(DOMAIN).await.expect("Failed to build null field map");

    assert_eq!(map.domain.core_fields, names(&["Name"]));
    let dcs = map.datacenters().expect("datacenters report");
    assert_eq!(dcs.len(), 2);
    assert_eq!(dcs["1"].core_fields, names(&["City"]));
    assert!(dcs["2"].core_fields.is_empty());
    assert_eq!(map.collisions, 0);
}

/// Test a realistic domain with every collection kind
#[tokio::test]
async fn test_null_field_map_full_domain() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    mount_domain(
        &server,
        json!({
            "name": DOMAIN,
            "type": "full",
            "defaultSslClientCertificate": null,
            "emailNotificationList": ["ops@example.com"],
            "links": [{"rel": "self", "href": "/config-gtm/v1/domains/example.akadns.net"}],
            "properties": [{
                "name": "www",
                "cname": null,
                "backupCName": null,
                "trafficTargets": [{"datacenterId": 3131, "handoutCName": null, "servers": ["1.2.3.4"]}],
                "livenessTests": []
            }],
            "resources": [{"name": "cpu", "description": null}],
            "cidrMaps": [{"name": "cidr", "defaultDatacenter": {"datacenterId": 5400, "nickname": null}}],
            "geographicMaps": [{"name": "geo", "assignments": [{"datacenterId": 3131, "countries": ["US"]}]}],
            "asMaps": []
        }),
    )
    .await;

    let client = create_test_client(&server);
    let map = client.domains().null_field_map(DOMAIN).await.expect("Failed to build null field map");

    assert_eq!(map.domain.core_fields, names(&["DefaultSslClientCertificate"]));
    assert!(map.collection("links").is_none());

    let www = &map.properties().unwrap()["www"];
    assert_eq!(www.core_fields, names(&["CName", "BackupCName"]));
    assert_eq!(www.child("TrafficTargets", "3131").unwrap().core_fields, names(&["HandoutCName"]));
    assert!(!www.child_fields.contains_key("LivenessTests"));

    assert_eq!(map.resources().unwrap()["cpu"].core_fields, names(&["Description"]));
    assert_eq!(map.cidr_maps().unwrap()["cidr"].core_fields, names(&["Nickname"]));
    assert!(map.geo_maps().unwrap()["geo"].child("Assignments", "3131").unwrap().is_empty());
    assert!(map.as_maps().unwrap().is_empty());
}

/// Test malformed collections surface as typed errors
#[tokio::test]
async fn test_null_field_map_malformed() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    mount_domain(&server, json!({"name": DOMAIN, "properties": [{"name": "www"}, 7]})).await;

    let client = create_test_client(&server);
    let err = client.domains().null_field_map(DOMAIN).await.unwrap_err();

    match err {
        GtmError::MalformedInput(MalformedInput::ExpectedObjectNode { path }) => {
            assert_eq!(path, "$.properties[1]");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// Test a schema override changes the recognized collections
#[tokio::test]
async fn test_null_field_map_custom_schema() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    mount_domain(
        &server,
        json!({"name": DOMAIN, "datacenters": [{"datacenterId": 1, "city": null}]}),
    )
    .await;

    let schema = NullFieldSchema {
        child_collections: vec!["properties".to_string()],
        ..NullFieldSchema::default()
    };
    let client = create_test_client(&server);
    let map = client
        .domains()
        .null_field_map_with(DOMAIN, &schema)
        .await
        .expect("Failed to build null field map");

    assert!(map.datacenters().is_none());
    assert!(map.domain.is_empty());
}
