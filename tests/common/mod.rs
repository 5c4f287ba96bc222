//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests including
//! test setup, fixtures, and helper functions.

use chartsvc_api::build_api_server;
use chartsvc_db::MemStore;
use chartsvc_service::ServiceRegistry;
use std::sync::Arc;
use tokio::net::TcpListener;

pub mod fixtures;

/// Test application backed by an in-memory store
pub struct TestApp {
    pub address: String,
    pub store: MemStore,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let store = MemStore::new();

        let services =
            ServiceRegistry::new(Arc::new(store.clone()), Arc::new(store.clone()));

        // Build router
        let app = build_api_server(services);

        // Start server on random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = listener.local_addr().expect("Failed to get local address");

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to start test server");
        });

        Self {
            address: format!("http://{}", address),
            store,
        }
    }

    /// Get base URL
    pub fn url(&self) -> &str {
        &self.address
    }

    /// Create HTTP client
    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .expect("Failed to build client")
    }
}

/// Assert a successful (2xx) response
pub fn assert_success(response: &reqwest::Response) {
    assert!(
        response.status().is_success(),
        "Expected success status, got {}",
        response.status()
    );
}

/// Assert a specific status code
pub fn assert_status(response: &reqwest::Response, expected: reqwest::StatusCode) {
    assert_eq!(
        response.status(),
        expected,
        "Expected status {}, got {}",
        expected,
        response.status()
    );
}
