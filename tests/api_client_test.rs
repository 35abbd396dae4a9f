use httpmock::prelude::*;
use job_portal_client::{ApiClient, Auth, ClientError, MemoryStorage, Role, User};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Job {
    job_id: i64,
    title: String,
}

fn logged_in_client(base_url: String) -> ApiClient<MemoryStorage> {
    let auth = Auth::new(Arc::new(MemoryStorage::new()));
    auth.set_auth("token-abc", &User::new("Anita", Role::Recruiter))
        .unwrap();
    ApiClient::new(base_url, auth)
}

#[tokio::test]
async fn test_get_attaches_bearer_token() {
    let server = MockServer::start();
    let jobs_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/jobs")
            .header("authorization", "Bearer token-abc")
            .header("content-type", "application/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"jobId": 1, "title": "Backend Engineer"},
                {"jobId": 2, "title": "Data Analyst"}
            ]));
    });

    let api = logged_in_client(server.url("/api"));
    let jobs: Vec<Job> = api.get("/jobs").await.unwrap();

    jobs_mock.assert();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].title, "Backend Engineer");
}

#[tokio::test]
async fn test_post_and_put_send_json_bodies() {
    let server = MockServer::start();
    let post_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/jobs")
            .header("authorization", "Bearer token-abc")
            .json_body(serde_json::json!({"jobId": 0, "title": "QA Lead"}));
        then.status(201)
            .json_body(serde_json::json!({"jobId": 9, "title": "QA Lead"}));
    });
    let put_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/jobs/9")
            .json_body(serde_json::json!({"jobId": 9, "title": "QA Manager"}));
        then.status(200)
            .json_body(serde_json::json!({"jobId": 9, "title": "QA Manager"}));
    });

    let api = logged_in_client(server.url("/api"));

    let created: Job = api
        .post(
            "/jobs",
            &Job {
                job_id: 0,
                title: "QA Lead".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(created.job_id, 9);

    let updated: Job = api
        .put(
            "/jobs/9",
            &Job {
                job_id: 9,
                title: "QA Manager".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "QA Manager");

    post_mock.assert();
    put_mock.assert();
}

#[tokio::test]
async fn test_delete_returns_parsed_body() {
    let server = MockServer::start();
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/jobs/4");
        then.status(200)
            .json_body(serde_json::json!({"success": true, "message": "Job deleted"}));
    });

    let api = logged_in_client(server.url("/api"));
    let body: serde_json::Value = api.delete("/jobs/4").await.unwrap();

    delete_mock.assert();
    assert_eq!(body["message"], "Job deleted");
}

#[tokio::test]
async fn test_error_status_body_is_still_parsed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/users");
        then.status(403)
            .json_body(serde_json::json!({"success": false, "message": "Access denied"}));
    });

    let api = logged_in_client(server.url("/api"));
    let body: serde_json::Value = api.get("/admin/users").await.unwrap();

    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Access denied");
}

#[tokio::test]
async fn test_non_json_body_is_a_serialization_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/broken");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let api = logged_in_client(server.url("/api"));
    let result: Result<serde_json::Value, ClientError> = api.get("/broken").await;

    assert!(matches!(result, Err(ClientError::SerializationError(_))));
}

#[tokio::test]
async fn test_connection_failure_is_an_http_error() {
    let auth = Auth::new(Arc::new(MemoryStorage::new()));
    let api = ApiClient::new("http://127.0.0.1:1/api", auth).with_timeout(Duration::from_secs(2));

    let result: Result<serde_json::Value, ClientError> = api.get("/jobs").await;

    assert!(matches!(result, Err(ClientError::HttpError(_))));
}
