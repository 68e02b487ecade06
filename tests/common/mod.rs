//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use itemdeck::api::{HttpItemSource, ItemSource};
use itemdeck::config::EndpointConfig;
use itemdeck::model::Item;
use itemdeck::viewmodel::{FetchStatus, ItemViewModel};
use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn item(id: i64, title: &str, description: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// JSON array body for `items`, as the endpoint serves it.
pub fn items_json(items: &[Item]) -> String {
    serde_json::to_string(items).expect("items serialize")
}

pub fn http_source(url: &str) -> HttpItemSource {
    let endpoint = EndpointConfig {
        url: url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    };
    HttpItemSource::new(&endpoint).expect("client builds")
}

/// Wait until the view model's fetch has finished one way or the other.
pub async fn wait_settled<S: ItemSource>(view_model: &ItemViewModel<S>) -> FetchStatus {
    let mut status = view_model.status();
    let wait = async {
        loop {
            let current = status.take();
            if current.is_settled() {
                return (*current).clone();
            }
            if !status.changed().await {
                panic!("status publisher dropped before settling");
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(5), wait)
        .await
        .expect("fetch did not settle in time")
}

/// Create a temporary config file with `body` as its content.
pub fn temp_config(body: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, body).expect("Failed to write config");
    (temp_dir, config_path)
}
