//! HTTP API integration tests.
//!
//! Starts the axum app on an ephemeral port over an in-memory database and
//! exercises it with reqwest.

use contacts_service::db::Database;
use contacts_service::repositories::{ContactRepository, SqliteContactRepository};
use contacts_service::server::{router, AppState};
use contacts_service::services::{ContactService, ContactServiceImpl};
use serde_json::{json, Value};
use std::sync::Arc;

/// Bind to port 0 and return the base URL.
async fn start_server_with(db: Database) -> String {
    let repo = Arc::new(SqliteContactRepository::new(db.pool().clone())) as Arc<dyn ContactRepository>;
    let service = Arc::new(ContactServiceImpl::new(repo)) as Arc<dyn ContactService>;
    let app = router(AppState::new(service, 100));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start_server() -> String {
    let db = Database::open(":memory:").unwrap();
    db.ensure_schema().await.unwrap();
    start_server_with(db).await
}

async fn create(client: &reqwest::Client, base: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{base}/contacts"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_contact_lifecycle() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = create(
        &client,
        &base,
        json!({"name": "Ann", "email": "a@b.com", "phone": "1234567890"}),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(
        created,
        json!({"id": 1, "name": "Ann", "email": "a@b.com", "phone": "1234567890"})
    );

    let resp = client
        .get(format!("{base}/contacts?page=1&limit=10"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let listed: Value = resp.json().await.unwrap();
    assert_eq!(listed, json!([created]));

    let resp = client
        .delete(format!("{base}/contacts/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"message": "Contact deleted", "changes": 1}));

    let resp = client
        .delete(format!("{base}/contacts/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"error": "Contact not found"}));

    let listed: Value = client
        .get(format!("{base}/contacts"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_create_validation_errors() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let cases = [
        (
            json!({"email": "a@b.com", "phone": "1234567890"}),
            "All fields are required",
        ),
        (
            json!({"name": "Ann", "email": "", "phone": "1234567890"}),
            "All fields are required",
        ),
        (
            json!({"name": "Ann", "email": "ab.com", "phone": "1234567890"}),
            "Invalid email format",
        ),
        (
            json!({"name": "Ann", "email": "a@bcom", "phone": "1234567890"}),
            "Invalid email format",
        ),
        (
            json!({"name": "Ann", "email": "a@b.com", "phone": "12345abcde"}),
            "Phone must be 10 digits",
        ),
        (
            json!({"name": "Ann", "email": "a@b.com", "phone": "12345678901"}),
            "Phone must be 10 digits",
        ),
    ];

    for (body, message) in cases {
        let resp = create(&client, &base, body.clone()).await;
        assert_eq!(resp.status(), 400, "body {body}");
        let err: Value = resp.json().await.unwrap();
        assert_eq!(err, json!({"error": message}), "body {body}");
    }

    // Nothing was persisted.
    let listed: Value = client
        .get(format!("{base}/contacts"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_create_rejects_non_json_body() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/contacts"))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err, json!({"error": "Request body must be a JSON object"}));
}

#[tokio::test]
async fn test_create_rejects_json_that_is_not_an_object() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let bodies = [
        json!(["Ann", "a@b.com", "1234567890"]),
        json!([]),
        json!("x"),
        json!(1),
        json!(null),
    ];

    for body in bodies {
        let resp = create(&client, &base, body.clone()).await;
        assert_eq!(resp.status(), 400, "body {body}");
        let err: Value = resp.json().await.unwrap();
        assert_eq!(
            err,
            json!({"error": "Request body must be a JSON object"}),
            "body {body}"
        );
    }

    let listed: Value = client
        .get(format!("{base}/contacts"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_create_without_content_type_has_no_fields() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/contacts"))
        .body(r#"{"name":"Ann","email":"a@b.com","phone":"1234567890"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err, json!({"error": "All fields are required"}));
}

#[tokio::test]
async fn test_unsupported_method_returns_json_405() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let requests = [
        client.delete(format!("{base}/contacts")),
        client.put(format!("{base}/contacts/1")),
        client.post(format!("{base}/health")),
    ];

    for request in requests {
        let resp = request.send().await.unwrap();
        assert_eq!(resp.status(), 405);
        let err: Value = resp.json().await.unwrap();
        assert_eq!(err, json!({"error": "Method not allowed"}));
    }
}

#[tokio::test]
async fn test_pagination() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    for (name, phone) in [("A", "1111111111"), ("B", "2222222222"), ("C", "3333333333")] {
        let resp = create(
            &client,
            &base,
            json!({"name": name, "email": "x@y.io", "phone": phone}),
        )
        .await;
        assert_eq!(resp.status(), 200);
    }

    let ids = |v: Value| -> Vec<i64> {
        v.as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_i64().unwrap())
            .collect()
    };

    let first: Value = client
        .get(format!("{base}/contacts?limit=2&page=1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .get(format!("{base}/contacts?limit=2&page=2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(ids(first), vec![1, 2]);
    assert_eq!(ids(second), vec![3]);
}

#[tokio::test]
async fn test_bad_pagination_and_ids() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    for query in ["page=0", "limit=-1", "limit=abc", "page=two"] {
        let resp = client
            .get(format!("{base}/contacts?{query}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "query {query}");
    }

    for id in ["abc", "0", "-5"] {
        let resp = client
            .delete(format!("{base}/contacts/{id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "id {id}");
        let err: Value = resp.json().await.unwrap();
        assert_eq!(err, json!({"error": "Invalid contact id"}));
    }
}

#[tokio::test]
async fn test_storage_failure_returns_500() {
    // Schema never created: every query fails in the store.
    let db = Database::open(":memory:").unwrap();
    let base = start_server_with(db).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/contacts")).send().await.unwrap();
    assert_eq!(resp.status(), 500);
    let err: Value = resp.json().await.unwrap();
    assert!(err["error"].as_str().unwrap().contains("no such table"));

    let resp = create(
        &client,
        &base,
        json!({"name": "Ann", "email": "a@b.com", "phone": "1234567890"}),
    )
    .await;
    assert_eq!(resp.status(), 500);
}

#[tokio::test]
async fn test_cors_headers() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/contacts"))
        .header("origin", "http://example.test")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "*"
    );

    let resp = client
        .request(reqwest::Method::OPTIONS, format!("{base}/contacts/3"))
        .header("origin", "http://example.test")
        .header("access-control-request-method", "DELETE")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    assert!(resp.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .contains("DELETE"));
}

#[tokio::test]
async fn test_health_counts_requests() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    client.get(format!("{base}/contacts")).send().await.unwrap();
    client
        .delete(format!("{base}/contacts/99"))
        .send()
        .await
        .unwrap();

    let body: Value = client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["ok"], true);
    // The health request itself is counted after its response is built.
    assert_eq!(body["requests_total"], 2);
    assert_eq!(body["errors_total"], 1);
}

#[tokio::test]
async fn test_unknown_route() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/nope")).await.unwrap();
    assert_eq!(resp.status(), 404);
}
