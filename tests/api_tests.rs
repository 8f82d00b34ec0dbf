//! API integration tests
//!
//! Every test spawns its own server on an ephemeral port, so each scenario
//! runs against an isolated, empty store.

use std::sync::Arc;

use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

use bookshelf_server::{config::AppConfig, create_router, services::Services, AppState};

/// Spin up the application on 127.0.0.1 and return its base URL
async fn spawn_app() -> String {
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new()),
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server crashed");
    });

    format!("http://{}", addr)
}

fn book_payload(id: Uuid, title: &str, author: &str, days_ago: i64) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": author,
        "published_date": Utc::now() - Duration::days(days_ago),
    })
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/v1/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_books_empty_initially() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/v1/books", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.as_array().expect("body is not an array").is_empty());
}

#[tokio::test]
async fn test_create_and_list_book() {
    let base = spawn_app().await;
    let client = Client::new();
    let id = Uuid::new_v4();
    let payload = book_payload(id, "Testbok", "Testförfattare", 1);

    // Create book
    let response = client
        .post(format!("{}/api/v1/books", base))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let location = response
        .headers()
        .get("location")
        .expect("missing Location header");
    assert_eq!(
        location.to_str().unwrap(),
        format!("/api/v1/books/{}", id)
    );

    let created: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["title"], "Testbok");

    // List books
    let body: Value = client
        .get(format!("{}/api/v1/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let books = body.as_array().expect("body is not an array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"], id.to_string());
    assert_eq!(books[0]["title"], "Testbok");
    assert_eq!(books[0]["author"], "Testförfattare");
    assert_eq!(books[0]["published_date"], payload["published_date"]);
}

#[tokio::test]
async fn test_update_book() {
    let base = spawn_app().await;
    let client = Client::new();
    let id = Uuid::new_v4();

    let response = client
        .post(format!("{}/api/v1/books", base))
        .json(&book_payload(id, "Originaltitel", "Originalförfattare", 10))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Update book
    let updated = book_payload(id, "Uppdaterad Titel", "Uppdaterad Författare", 5);
    let response = client
        .put(format!("{}/api/v1/books/{}", base, id))
        .json(&updated)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = client
        .get(format!("{}/api/v1/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let books = body.as_array().expect("body is not an array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"], id.to_string());
    assert_eq!(books[0]["title"], "Uppdaterad Titel");
    assert_eq!(books[0]["author"], "Uppdaterad Författare");
    assert_eq!(books[0]["published_date"], updated["published_date"]);
}

#[tokio::test]
async fn test_update_book_with_empty_title_is_rejected() {
    let base = spawn_app().await;
    let client = Client::new();
    let id = Uuid::new_v4();

    let response = client
        .post(format!("{}/api/v1/books", base))
        .json(&book_payload(id, "Testbok", "Testförfattare", 1))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .put(format!("{}/api/v1/books/{}", base, id))
        .json(&book_payload(id, "", "Testförfattare", 1))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    // Store is untouched
    let body: Value = client
        .get(format!("{}/api/v1/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body[0]["title"], "Testbok");
}

#[tokio::test]
async fn test_update_missing_book_returns_not_found() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/v1/books/{}", base, Uuid::new_v4()))
        .json(&book_payload(Uuid::new_v4(), "Testbok", "Testförfattare", 1))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_create_and_delete_book() {
    let base = spawn_app().await;
    let client = Client::new();
    let id = Uuid::new_v4();

    let response = client
        .post(format!("{}/api/v1/books", base))
        .json(&book_payload(id, "Testbok", "Testförfattare", 1))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Delete book
    let response = client
        .delete(format!("{}/api/v1/books/{}", base, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let body: Value = client
        .get(format!("{}/api/v1/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(body.as_array().expect("body is not an array").is_empty());

    // Deleting again reports not found
    let response = client
        .delete(format!("{}/api/v1/books/{}", base, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_delete_missing_book_returns_not_found() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/api/v1/books/{}", base, Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api-docs/openapi.json", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["info"]["title"], "Bookshelf API");
    assert!(body["paths"]["/books"].is_object());
}
