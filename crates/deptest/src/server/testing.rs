//! Shared fixtures for router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use deptest_core::identity::{Clock, IdGenerator, Timestamp};
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use tower::ServiceExt;

use super::context::{AppContext, Collaborators};
use super::external::ExternalSource;
use crate::prelude::*;

pub fn test_collaborators() -> Collaborators {
    Collaborators::new("test-secret")
}

/// Default context with an upstream that answers `null`
pub fn test_context() -> AppContext {
    AppContext::with_parts(test_collaborators(), Arc::new(StaticSource(Value::Null)))
}

pub struct StaticSource(pub Value);

impl ExternalSource for StaticSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Value>> {
        let result: Result<Value> = Ok(self.0.clone());
        async move { result }.boxed()
    }
}

pub struct FailingSource;

impl ExternalSource for FailingSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Value>> {
        let result: Result<Value> = Err(eyre!("upstream unavailable"));
        async move { result }.boxed()
    }
}

/// Always reports the same instant
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }
}

/// Hands out the same id every time
pub struct RepeatingIds;

impl IdGenerator for RepeatingIds {
    fn generate(&self) -> String {
        "always-the-same".to_string()
    }
}

/// Sequential ids: `id-1`, `id-2`, ...
#[derive(Default)]
pub struct SequentialIds(AtomicUsize);

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Send one request through the router and decode the JSON response
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map(|json| ("application/json", json.to_string()));
    send_raw(app, method, uri, body).await
}

/// Like [`send`], with an explicit content type and raw body text
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<(&str, String)>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some((content_type, text)) => builder
            .header("content-type", content_type)
            .body(Body::from(text)),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
