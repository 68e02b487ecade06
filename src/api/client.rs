use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::api::error::FetchError;
use crate::config::EndpointConfig;
use crate::model::Item;

/// Anything that can produce the current item list.
///
/// The view model is generic over this so tests can script results without
/// a network.
pub trait ItemSource: Send + Sync + 'static {
    fn fetch_items(&self) -> impl Future<Output = Result<Vec<Item>, FetchError>> + Send;
}

/// `reqwest`-backed source that GETs a fixed URL.
pub struct HttpItemSource {
    client: Client,
    url: String,
}

impl HttpItemSource {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(endpoint.connect_timeout_seconds))
            .timeout(Duration::from_secs(endpoint.timeout_seconds))
            .build()
            .map_err(|source| FetchError::Client { source })?;

        Ok(Self {
            client,
            url: endpoint.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ItemSource for HttpItemSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        tracing::info!(url = %self.url, "Fetching items");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let items = decode_items(&body);
        tracing::info!(count = items.len(), "Fetched items");
        Ok(items)
    }
}

/// Decode a response body into items.
///
/// An empty body, a JSON `null`, or a body that does not decode as an array
/// of items yields an empty list.
pub fn decode_items(body: &str) -> Vec<Item> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Option<Vec<Item>>>(body) {
        Ok(items) => items.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(error = %err, "Item response did not decode, using empty list");
            Vec::new()
        }
    }
}
