// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use httptest::{Expectation, Server, matchers::*, responders::*};
use retention_policy_notifier::{Notifier, host};
use serde_json::json;
use std::net::SocketAddr;
use tokio::net::TcpListener;

type TestResult = anyhow::Result<()>;

const FINALIZED: &str = "google.cloud.storage.object.v1.finalized";

async fn start_host(retention_service: &Server) -> anyhow::Result<SocketAddr> {
    let notifier = Notifier::builder()
        .with_endpoint(retention_service.url_str("/retentionrules/"))
        .with_project_id("my-project")
        .build()?;
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(host::serve(listener, notifier));
    Ok(addr)
}

fn expect_rule(server: &Server, body: serde_json::Value, times: usize) {
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/retentionrules/"),
            request::headers(contains(("content-type", "application/json"))),
            request::body(json_decoded(eq(body))),
        ])
        .times(times)
        .respond_with(json_encoded(json!({"requestUuid": "abc-123", "ruleId": 1}))),
    );
}

#[tokio::test]
async fn binary_mode_event() -> TestResult {
    let retention_service = Server::run();
    expect_rule(
        &retention_service,
        json!({
            "datasetName": "mydataset",
            "dataStorageName": "gs://my-bucket/mydataset",
            "projectId": "my-project",
            "retentionPeriod": 30,
            "type": "DATASET",
        }),
        1,
    );
    let addr = start_host(&retention_service).await?;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .header("ce-id", "1234")
        .header("ce-specversion", "1.0")
        .header("ce-type", FINALIZED)
        .header("ce-source", "//storage.googleapis.com/projects/_/buckets/my-bucket")
        .header("ce-subject", "objects/mydataset/file_30")
        .json(&json!({
            "name": "mydataset/file_30",
            "bucket": "my-bucket",
            "contentType": "text/plain",
            "size": "1024",
        }))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn structured_mode_event() -> TestResult {
    let retention_service = Server::run();
    expect_rule(
        &retention_service,
        json!({
            "datasetName": "",
            "dataStorageName": "gs://my-bucket/",
            "projectId": "my-project",
            "retentionPeriod": 7,
            "type": "DATASET",
        }),
        1,
    );
    let addr = start_host(&retention_service).await?;

    let body = json!({
        "specversion": "1.0",
        "id": "5678",
        "type": FINALIZED,
        "source": "//storage.googleapis.com/projects/_/buckets/my-bucket",
        "data": {"name": "file_7", "bucket": "my-bucket"},
    });
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .header("content-type", "application/cloudevents+json")
        .body(body.to_string())
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn repeated_events() -> TestResult {
    let retention_service = Server::run();
    expect_rule(
        &retention_service,
        json!({
            "datasetName": "a",
            "dataStorageName": "gs://my-bucket/a",
            "projectId": "my-project",
            "retentionPeriod": 5,
            "type": "DATASET",
        }),
        2,
    );
    let addr = start_host(&retention_service).await?;

    let client = reqwest::Client::new();
    for _ in 0..2 {
        let response = client
            .post(format!("http://{addr}/"))
            .json(&json!({"name": "a/b_c_5", "bucket": "my-bucket"}))
            .send()
            .await?;
        assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    }
    Ok(())
}

#[tokio::test]
async fn failed_invocations() -> TestResult {
    // No expectations, any request to the retention service fails the test.
    let retention_service = Server::run();
    let addr = start_host(&retention_service).await?;

    let client = reqwest::Client::new();
    let bodies = [
        json!({"name": "abc/file", "bucket": "my-bucket"}),
        json!({"bucket": "my-bucket"}),
        json!({"name": "mydataset/file_30"}),
    ];
    for body in bodies {
        let response = client
            .post(format!("http://{addr}/"))
            .json(&body)
            .send()
            .await?;
        assert_eq!(
            response.status(),
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "{body}"
        );
    }
    Ok(())
}

#[tokio::test]
async fn retention_service_not_json() -> TestResult {
    let retention_service = Server::run();
    retention_service.expect(
        Expectation::matching(request::method_path("POST", "/retentionrules/"))
            .respond_with(status_code(502).body("Bad Gateway")),
    );
    let addr = start_host(&retention_service).await?;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .json(&json!({"name": "mydataset/file_30", "bucket": "my-bucket"}))
        .send()
        .await?;
    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );
    let text = response.text().await?;
    assert!(text.contains("retention rules service"), "{text}");
    Ok(())
}
