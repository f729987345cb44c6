//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all song endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /health
    pub async fn health(&self) -> Response {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /api/v1/songs/ with optional page and size query parameters
    pub async fn list_songs(&self, page: Option<usize>, size: Option<usize>) -> Response {
        let mut request = self.client.get(format!("{}/api/v1/songs/", self.base_url));
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }
        if let Some(size) = size {
            request = request.query(&[("size", size)]);
        }
        request.send().await.expect("Request failed")
    }

    /// GET /api/v1/songs/{title}
    pub async fn get_song(&self, title: &str) -> Response {
        self.client
            .get(format!("{}/api/v1/songs/{}", self.base_url, title))
            .send()
            .await
            .expect("Request failed")
    }

    /// PUT /api/v1/songs/{title}/rating?rating={rating}
    pub async fn update_rating(&self, title: &str, rating: u8) -> Response {
        self.client
            .put(format!(
                "{}/api/v1/songs/{}/rating",
                self.base_url, title
            ))
            .query(&[("rating", rating)])
            .send()
            .await
            .expect("Request failed")
    }
}
