// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::TimeZone;
use exercise_tracker::clock::MockClock;
use exercise_tracker::config::Config;
use exercise_tracker::db::UserStore;
use exercise_tracker::routes::create_router;
use exercise_tracker::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Fixed "now" for tests: Monday 2024-01-15 12:00 UTC.
#[allow(dead_code)]
pub fn test_now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

/// Test app backed by an in-memory store and a mock clock.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    #[allow(dead_code)]
    pub state: Arc<AppState>,
    #[allow(dead_code)]
    pub store: UserStore,
    #[allow(dead_code)]
    pub clock: Arc<MockClock>,
}

#[allow(dead_code)]
pub fn create_test_app() -> TestApp {
    let store = UserStore::in_memory();
    let clock = Arc::new(MockClock::with_time(test_now()));
    let state = Arc::new(
        AppState::new(Config::default(), store.clone(), clock.clone())
            .expect("Failed to build app state"),
    );

    TestApp {
        router: create_router(state.clone()),
        state,
        store,
        clock,
    }
}

#[allow(dead_code)]
impl TestApp {
    /// Send a request and decode the JSON body, asserting HTTP 200.
    pub async fn send(&self, request: Request<Body>) -> Value {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        serde_json::from_slice(&bytes).expect("Response is not JSON")
    }

    pub async fn get(&self, uri: &str) -> Value {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Value {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Value {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Create a user through the API and return its id.
    pub async fn create_user(&self, username: &str) -> String {
        let body = self
            .post_form("/api/users", &format!("username={username}"))
            .await;
        body["_id"].as_str().expect("Missing _id").to_string()
    }

    /// Append an exercise through the API.
    pub async fn add_exercise(
        &self,
        id: &str,
        description: &str,
        duration: &str,
        date: &str,
    ) -> Value {
        let mut body = format!("description={description}&duration={duration}");
        if !date.is_empty() {
            body.push_str(&format!("&date={date}"));
        }
        self.post_form(&format!("/api/users/{id}/exercises"), &body).await
    }
}
