// Copyright 2024 The Kongming Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Once;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

fn set_up(server: &MockServer) -> kongming::Cloud {
    INIT.call_once(|| {
        env_logger::init();
    });

    let auth = kongming::osauth::NoAuth::new(server.uri()).expect("Invalid mock server URL");
    kongming::Cloud::from(kongming::osauth::Session::new(auth))
}

fn mapping_json(instance_uuid: &str, host: &str) -> serde_json::Value {
    json!({
        "instance_uuid": instance_uuid,
        "cpu_mappings": "0:1,1:3",
        "host": host,
        "status": "ACTIVE",
        "project_id": "7b70656e737461636b",
        "user_id": "9a1c355b"
    })
}

async fn mock_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/instance_cpu_mappings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mappings": [
                mapping_json("u1", "compute-0"),
                mapping_json("u2", "compute-1"),
                mapping_json("u3", "compute-0"),
            ]
        })))
        .mount(server)
        .await;
}

async fn mock_missing(server: &MockServer, id: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/instance_cpu_mappings/{}", id)))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": {"message": "no such mapping"}})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_returns_requested_identity() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    Mock::given(method("GET"))
        .and(path("/instance_cpu_mappings/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mapping_json("u1", "compute-0")))
        .mount(&server)
        .await;

    let mapping = os.get_cpu_mapping("u1").await.expect("Cannot get mapping");
    assert_eq!(mapping.instance_uuid(), "u1");
    assert_eq!(mapping.cpu_mappings(), "0:1,1:3");
    assert_eq!(
        mapping.status().unwrap(),
        kongming::pinning::MappingStatus::Active
    );
}

#[tokio::test]
async fn test_get_by_id_does_not_list() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    Mock::given(method("GET"))
        .and(path("/instance_cpu_mappings/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mapping_json("u1", "compute-0")))
        .mount(&server)
        .await;
    // The fallback listing must not be consulted on a direct ID hit.
    Mock::given(method("GET"))
        .and(path("/instance_cpu_mappings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mappings": []})))
        .expect(0)
        .mount(&server)
        .await;

    let mapping = os.get_cpu_mapping("u1").await.expect("Cannot get mapping");
    assert_eq!(mapping.instance_uuid(), "u1");
}

#[tokio::test]
async fn test_get_falls_back_to_unique_host_match() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    mock_missing(&server, "compute-1").await;
    mock_listing(&server).await;

    let mapping = os
        .get_cpu_mapping("compute-1")
        .await
        .expect("Cannot find mapping by host");
    assert_eq!(mapping.instance_uuid(), "u2");
}

#[tokio::test]
async fn test_get_fails_on_ambiguous_token() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    mock_missing(&server, "compute-0").await;
    mock_listing(&server).await;

    let err = os.get_cpu_mapping("compute-0").await.unwrap_err();
    assert_eq!(err.kind(), kongming::ErrorKind::TooManyItems);
}

#[tokio::test]
async fn test_get_fails_on_unknown_token() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    mock_missing(&server, "compute-9").await;
    mock_listing(&server).await;

    let err = os.get_cpu_mapping("compute-9").await.unwrap_err();
    assert_eq!(err.kind(), kongming::ErrorKind::NoMatchingResource);
}

#[tokio::test]
async fn test_list_empty_envelope() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    Mock::given(method("GET"))
        .and(path("/instance_cpu_mappings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mappings": []})))
        .mount(&server)
        .await;

    let mappings = os.list_cpu_mappings().await.expect("Cannot list mappings");
    assert!(mappings.is_empty());
}

#[tokio::test]
async fn test_create_sends_exact_body() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    Mock::given(method("POST"))
        .and(path("/instance_cpu_mappings"))
        .and(body_json(json!({
            "instance_uuid": "u1",
            "cpu_mappings": "0:1,1:3",
            "wait_until_active": true,
            "project_id": "p1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(mapping_json("u1", "compute-0")))
        .expect(1)
        .mount(&server)
        .await;

    let mapping = os
        .new_cpu_mapping("u1", "0:1,1:3")
        .with_wait_until_active(true)
        .with_project_id("p1")
        .create()
        .await
        .expect("Cannot create mapping");
    assert_eq!(mapping.instance_uuid(), "u1");
}

#[tokio::test]
async fn test_update_emits_one_replace_per_field_in_order() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    Mock::given(method("PATCH"))
        .and(path("/instance_cpu_mappings/u1"))
        .and(body_json(json!([
            {"op": "replace", "path": "/cpu_mappings", "value": "2:4"},
            {"op": "replace", "path": "/wait_until_active", "value": false},
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(mapping_json("u1", "compute-0")))
        .expect(1)
        .mount(&server)
        .await;

    let mapping = os
        .update_cpu_mapping("u1")
        .with_cpu_mappings("2:4")
        .with_wait_until_active(false)
        .send()
        .await
        .expect("Cannot update mapping");
    assert_eq!(mapping.instance_uuid(), "u1");
}

#[tokio::test]
async fn test_batch_delete_attempts_every_item() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    for id in ["u1", "u2", "u3"] {
        Mock::given(method("GET"))
            .and(path(format!("/instance_cpu_mappings/{}", id)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(mapping_json(id, "compute-0")),
            )
            .mount(&server)
            .await;
    }
    for id in ["u1", "u3"] {
        Mock::given(method("DELETE"))
            .and(path(format!("/instance_cpu_mappings/{}", id)))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("DELETE"))
        .and(path("/instance_cpu_mappings/u2"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"error": {"message": "in use"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = os
        .delete_cpu_mappings(&["u1", "u2", "u3"])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), kongming::ErrorKind::OperationFailed);
    assert!(err.to_string().contains("1 of 3"));
}

#[tokio::test]
async fn test_equality_follows_identity() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    Mock::given(method("GET"))
        .and(path("/instance_cpu_mappings/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mapping_json("u1", "compute-0")))
        .mount(&server)
        .await;
    mock_listing(&server).await;

    let direct = os.get_cpu_mapping("u1").await.expect("Cannot get mapping");
    let listed = os.list_cpu_mappings().await.expect("Cannot list mappings");
    assert_eq!(direct, listed[0]);
    assert!(direct != listed[1]);
}

#[tokio::test]
async fn test_to_mapping_round_trips_response() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    let body = mapping_json("u1", "compute-0");
    Mock::given(method("GET"))
        .and(path("/instance_cpu_mappings/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let mapping = os.get_cpu_mapping("u1").await.expect("Cannot get mapping");
    let fields = mapping.to_mapping().expect("Cannot convert to a mapping");
    assert_eq!(serde_json::Value::Object(fields), body);
}
