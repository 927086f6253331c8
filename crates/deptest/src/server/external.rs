use futures::future::{BoxFuture, FutureExt};
use serde::Serialize;
use serde_json::Value;

use crate::prelude::*;

pub const DEFAULT_EXTERNAL_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// Upstream JSON document fetched by `GET /api/external`
pub trait ExternalSource: Send + Sync {
    fn fetch(&self) -> BoxFuture<'_, Result<Value>>;
}

/// Response of `GET /api/external`
#[derive(Debug, Serialize)]
pub struct ExternalPayload {
    pub message: String,
    pub data: Value,
}

impl ExternalPayload {
    pub fn new(data: Value) -> Self {
        Self {
            message: "External API call succeeded".to_string(),
            data,
        }
    }
}

pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
        }
    }
}

impl ExternalSource for HttpSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Value>> {
        async move {
            let response = self
                .client
                .get(&self.url)
                .header("User-Agent", "deptest")
                .send()
                .await
                .map_err(|e| eyre!("Failed to fetch {}: {}", self.url, e))?;

            if !response.status().is_success() {
                return Err(eyre!(
                    "Request failed with status code {}",
                    response.status().as_u16()
                ));
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| eyre!("Failed to parse response from {}: {}", self.url, e))
        }
        .boxed()
    }
}
