//! Integration tests for the data service router.
//!
//! The PostgreSQL store is swapped for in-memory implementations of
//! `MessageStore` so the handler and error translation are exercised without
//! a live database.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use msgrelay::data::{create_router, DataState};
use msgrelay::store::MessageStore;
use msgrelay::{Error, Result};
use tower::ServiceExt; // for oneshot

struct InMemoryStore {
    rows: Vec<(i64, String)>,
}

#[async_trait]
impl MessageStore for InMemoryStore {
    async fn fetch_first_message(&self) -> Result<Option<String>> {
        Ok(self
            .rows
            .iter()
            .min_by_key(|(id, _)| *id)
            .map(|(_, content)| content.clone()))
    }
}

struct FailingStore;

#[async_trait]
impl MessageStore for FailingStore {
    async fn fetch_first_message(&self) -> Result<Option<String>> {
        Err(Error::database("connection refused"))
    }
}

fn app(store: impl MessageStore + 'static) -> axum::Router {
    create_router(DataState::new(Arc::new(store)))
}

async fn get_message(app: axum::Router) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/message")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn returns_seeded_message() {
    let app = app(InMemoryStore {
        rows: vec![(1, "hello".to_string())],
    });

    let (status, body) = get_message(app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "hello");
}

#[tokio::test]
async fn returns_404_on_empty_table() {
    let app = app(InMemoryStore { rows: vec![] });

    let (status, body) = get_message(app).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("No message found"));
}

#[tokio::test]
async fn returns_lowest_id_row() {
    // Insertion order must not matter; only ascending id does.
    let app = app(InMemoryStore {
        rows: vec![(7, "later".to_string()), (1, "hello".to_string())],
    });

    let (status, body) = get_message(app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "hello");
}

#[tokio::test]
async fn returns_500_with_database_detail() {
    let app = app(FailingStore);

    let (status, body) = get_message(app).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Database error: connection refused");
}

#[tokio::test]
async fn health_reports_service_name() {
    let app = app(InMemoryStore { rows: vec![] });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["service"], "data-service");
}
