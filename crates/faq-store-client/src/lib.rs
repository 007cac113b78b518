use anyhow::{Result, anyhow};
use async_trait::async_trait;
use faq_api_types::{CreateItemRequest, Item, ItemSelector};
use std::sync::RwLock;

/// Remote item store holding the authoritative FAQ items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Item>>;
    async fn create_item(&self, req: CreateItemRequest) -> Result<()>;
    async fn delete_items(&self, selector: &ItemSelector) -> Result<()>;
}

#[async_trait]
impl<S> ItemStore for &S
where
    S: ItemStore + ?Sized,
{
    async fn list_items(&self) -> Result<Vec<Item>> {
        (**self).list_items().await
    }

    async fn create_item(&self, req: CreateItemRequest) -> Result<()> {
        (**self).create_item(req).await
    }

    async fn delete_items(&self, selector: &ItemSelector) -> Result<()> {
        (**self).delete_items(selector).await
    }
}

/// Process-local store. Keeps items in insertion order.
#[derive(Default)]
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|guard| guard.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list_items(&self) -> Result<Vec<Item>> {
        let guard = self.items.read().map_err(|_| anyhow!("item store lock poisoned"))?;
        Ok(guard.clone())
    }

    async fn create_item(&self, req: CreateItemRequest) -> Result<()> {
        let mut guard = self.items.write().map_err(|_| anyhow!("item store lock poisoned"))?;
        guard.push(req.into());
        Ok(())
    }

    async fn delete_items(&self, selector: &ItemSelector) -> Result<()> {
        let mut guard = self.items.write().map_err(|_| anyhow!("item store lock poisoned"))?;
        guard.retain(|item| !selector.selects(item));
        Ok(())
    }
}
