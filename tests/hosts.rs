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
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

fn set_up(server: &MockServer) -> kongming::Cloud {
    INIT.call_once(|| {
        env_logger::init();
    });

    let auth = kongming::osauth::NoAuth::new(server.uri()).expect("Invalid mock server URL");
    kongming::Cloud::from(kongming::osauth::Session::new(auth))
}

fn host_json(host_name: &str) -> serde_json::Value {
    json!({
        "host_name": host_name,
        "cpu_topology": {"sockets": 2, "cores": 24, "threads": 2}
    })
}

#[tokio::test]
async fn test_list_decodes_instances_envelope() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    // The service nests hosts under "instances" in list responses.
    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instances": [host_json("compute-0"), host_json("compute-1")]
        })))
        .mount(&server)
        .await;

    let hosts = os.list_hosts().await.expect("Cannot list hosts");
    assert_eq!(hosts.len(), 2);
    assert_eq!(hosts[0].host_name(), "compute-0");
    assert_eq!(hosts[1].host_name(), "compute-1");
}

#[tokio::test]
async fn test_get_host_direct() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    Mock::given(method("GET"))
        .and(path("/hosts/compute-0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(host_json("compute-0")))
        .mount(&server)
        .await;

    let host = os.get_host("compute-0").await.expect("Cannot get host");
    assert_eq!(host.host_name(), "compute-0");
    assert_eq!(*host.cpu_topology().get("cores").unwrap(), json!(24));
}

#[tokio::test]
async fn test_get_host_falls_back_to_listing() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    Mock::given(method("GET"))
        .and(path("/hosts/compute-1"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": {"message": "no such host"}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instances": [host_json("compute-0"), host_json("compute-1")]
        })))
        .mount(&server)
        .await;

    let host = os.get_host("compute-1").await.expect("Cannot find host");
    assert_eq!(host.host_name(), "compute-1");
}

#[tokio::test]
async fn test_get_host_unknown_name() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    Mock::given(method("GET"))
        .and(path("/hosts/compute-9"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": {"message": "no such host"}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instances": [host_json("compute-0")]
        })))
        .mount(&server)
        .await;

    let err = os.get_host("compute-9").await.unwrap_err();
    assert_eq!(err.kind(), kongming::ErrorKind::NoMatchingResource);
}

#[tokio::test]
async fn test_get_instance() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    Mock::given(method("GET"))
        .and(path("/instances/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": "u1",
            "name": "vm-1",
            "host": "compute-0",
            "status": "ACTIVE"
        })))
        .mount(&server)
        .await;

    let instance = os.get_instance("u1").await.expect("Cannot get instance");
    assert_eq!(instance.uuid(), "u1");
    assert_eq!(instance.name().as_deref(), Some("vm-1"));
}

#[tokio::test]
async fn test_get_instance_missing_is_transport_not_found() {
    let server = MockServer::start().await;
    let os = set_up(&server);

    // Instances cannot be listed, so there is no name fallback.
    Mock::given(method("GET"))
        .and(path("/instances/u9"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": {"message": "no such instance"}})),
        )
        .mount(&server)
        .await;

    let err = os.get_instance("u9").await.unwrap_err();
    assert_eq!(err.kind(), kongming::ErrorKind::ResourceNotFound);
}
