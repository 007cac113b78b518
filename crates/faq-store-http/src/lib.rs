use anyhow::{Context, Result};
use async_trait::async_trait;
use faq_api_types::{CreateItemRequest, Item, ItemSelector};
use faq_store_client::ItemStore;
use tracing::{debug, warn};

pub use faq_api_types::DEFAULT_STORE_URL;

/// HTTP adapter for the remote FAQ item store.
///
/// Reads `FAQ_STORE_URL` from environment at construction time
/// (default: [`DEFAULT_STORE_URL`]).
pub struct HttpItemStore {
    endpoint: String,
    http: reqwest::Client,
}

impl Default for HttpItemStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HttpItemStore {
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint
            .or_else(|| std::env::var("FAQ_STORE_URL").ok())
            .unwrap_or_else(|| DEFAULT_STORE_URL.to_string());
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.endpoint)
    }
}

#[async_trait]
impl ItemStore for HttpItemStore {
    async fn list_items(&self) -> Result<Vec<Item>> {
        let url = self.items_url();
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("item store list transport")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("item store list HTTP {status}: {text}");
        }

        response
            .json::<Vec<Item>>()
            .await
            .context("item store list parse")
    }

    async fn create_item(&self, req: CreateItemRequest) -> Result<()> {
        let url = self.items_url();
        debug!(uid = %req.uid, category = %req.category, "POST {url}");

        let response = self
            .http
            .post(&url)
            .json(&req)
            .send()
            .await
            .context("item store create transport")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("create {} rejected with {status}", req.uid);
            anyhow::bail!("item store create HTTP {status}: {text}");
        }

        Ok(())
    }

    async fn delete_items(&self, selector: &ItemSelector) -> Result<()> {
        let url = self.items_url();
        let (key, value) = selector.query_pair();
        debug!("DELETE {url}?{key}={value}");

        let response = self
            .http
            .delete(&url)
            .query(&[(key, value)])
            .send()
            .await
            .context("item store delete transport")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("delete {key}={value} rejected with {status}");
            anyhow::bail!("item store delete HTTP {status}: {text}");
        }

        Ok(())
    }
}
