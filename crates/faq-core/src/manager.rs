use crate::catalog::Catalog;
use crate::draft::NewItemDraft;
use crate::error::FaqError;
use crate::view::CatalogView;
use faq_api_types::ItemSelector;
use faq_store_client::ItemStore;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Drives a [`Catalog`] against an [`ItemStore`]: every successful mutation is
/// followed by a full reload. Failed mutations leave the snapshot untouched.
pub struct FaqManager<S> {
    store: S,
    catalog: Catalog,
}

impl<S> FaqManager<S>
where
    S: ItemStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            catalog: Catalog::default(),
        }
    }

    /// Construct and perform the initial load.
    pub async fn load(store: S) -> Result<Self, FaqError> {
        let mut manager = Self::new(store);
        manager.reload().await?;
        Ok(manager)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn view(&self) -> CatalogView {
        self.catalog.view()
    }

    pub async fn reload(&mut self) -> Result<(), FaqError> {
        let ticket = self.catalog.begin_reload();
        let items = self.store.list_items().await.map_err(FaqError::Store)?;
        let count = items.len();
        if self.catalog.apply_snapshot(ticket, items) {
            info!(
                "loaded {} items in {} categories",
                count,
                self.catalog.category_options().len()
            );
        }
        Ok(())
    }

    /// Validate, create and reload. Returns the uid assigned to the new item.
    pub async fn add_item(&mut self, draft: &NewItemDraft) -> Result<String, FaqError> {
        let req = self.catalog.prepare_item(draft, epoch_ms())?;
        let uid = req.uid.clone();

        self.store.create_item(req).await.map_err(|err| {
            warn!("error adding question {}: {:#}", uid, err);
            FaqError::Store(err)
        })?;

        self.reload().await?;
        Ok(uid)
    }

    pub async fn delete_item(&mut self, uid: &str) -> Result<(), FaqError> {
        self.store
            .delete_items(&ItemSelector::Uid(uid.to_owned()))
            .await
            .map_err(|err| {
                warn!("error deleting question {}: {:#}", uid, err);
                FaqError::Store(err)
            })?;

        self.reload().await
    }

    pub async fn delete_category(&mut self, name: &str) -> Result<(), FaqError> {
        self.store
            .delete_items(&ItemSelector::Category(name.to_owned()))
            .await
            .map_err(|err| {
                warn!("error deleting category {}: {:#}", name, err);
                FaqError::Store(err)
            })?;

        self.catalog.forget_category(name);
        self.reload().await
    }

    /// Local-only; nothing reaches the store until an item uses the category.
    pub fn add_category(&mut self, raw: &str) -> Result<String, FaqError> {
        Ok(self.catalog.add_category(raw)?)
    }
}

fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use anyhow::{Result, bail};
    use async_trait::async_trait;
    use faq_api_types::{CreateItemRequest, Item};
    use faq_store_client::InMemoryItemStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn item(uid: &str, question: &str, answer: &str, category: &str) -> Item {
        Item {
            uid: uid.to_owned(),
            question: question.to_owned(),
            answer: answer.to_owned(),
            category: Some(category.to_owned()),
        }
    }

    /// Counts calls and can be told to reject mutations.
    #[derive(Default)]
    struct RecordingStore {
        inner: InMemoryItemStore,
        calls: AtomicUsize,
        reject_mutations: bool,
    }

    #[async_trait]
    impl ItemStore for RecordingStore {
        async fn list_items(&self) -> Result<Vec<Item>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.list_items().await
        }

        async fn create_item(&self, req: CreateItemRequest) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.reject_mutations {
                bail!("item store create HTTP 500 Internal Server Error");
            }
            self.inner.create_item(req).await
        }

        async fn delete_items(&self, selector: &ItemSelector) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.reject_mutations {
                bail!("item store delete HTTP 500 Internal Server Error");
            }
            self.inner.delete_items(selector).await
        }
    }

    #[tokio::test]
    async fn added_item_is_visible_after_reload() -> Result<()> {
        let store = InMemoryItemStore::default();
        let mut manager = FaqManager::load(&store).await?;

        let uid = manager
            .add_item(&NewItemDraft::new("What is X?", "X is Y", "Basics"))
            .await?;

        assert!(uid.starts_with('q'));
        assert_eq!(store.len(), 1);
        let view = manager.view();
        let basics = view.group("Basics").expect("group rendered");
        assert_eq!(basics.rows.len(), 1);
        assert_eq!(basics.rows[0].uid, uid);
        Ok(())
    }

    #[tokio::test]
    async fn empty_answer_never_reaches_the_store() -> Result<()> {
        let mut manager = FaqManager::load(RecordingStore::default()).await?;
        let calls_after_load = manager.store().calls.load(Ordering::SeqCst);

        let err = manager
            .add_item(&NewItemDraft::new("What is X?", "", "Basics"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FaqError::Validation(ValidationError::MissingAnswer)
        ));
        assert_eq!(manager.store().calls.load(Ordering::SeqCst), calls_after_load);
        Ok(())
    }

    #[tokio::test]
    async fn deleting_last_item_leaves_empty_category() -> Result<()> {
        let store = InMemoryItemStore::with_items(vec![item("q1", "What is X?", "X is Y", "Basics")]);
        let mut manager = FaqManager::load(&store).await?;

        manager.delete_item("q1").await?;
        let view = manager.view();
        let basics = view.group("Basics").expect("empty group kept");
        assert!(basics.rows.is_empty());
        assert!(basics.deletable);

        manager.delete_category("Basics").await?;
        assert!(manager.view().group("Basics").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn failed_mutation_keeps_previous_snapshot() -> Result<()> {
        let store = RecordingStore {
            inner: InMemoryItemStore::with_items(vec![item("q1", "What is X?", "X is Y", "Basics")]),
            reject_mutations: true,
            ..RecordingStore::default()
        };
        let mut manager = FaqManager::load(store).await?;

        let err = manager.delete_category("Basics").await.unwrap_err();
        assert!(matches!(err, FaqError::Store(_)));
        assert!(err.to_string().contains("HTTP 500"));

        let view = manager.view();
        assert_eq!(view.group("Basics").map(|g| g.rows.len()), Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn local_category_is_not_persisted() -> Result<()> {
        let store = InMemoryItemStore::default();
        let mut manager = FaqManager::load(&store).await?;

        assert_eq!(manager.add_category("Drafts")?, "Drafts");
        assert!(store.is_empty());
        assert_eq!(manager.catalog().category_options(), ["Drafts"]);

        manager
            .add_item(&NewItemDraft::new("Q?", "A", "Drafts"))
            .await?;
        assert_eq!(store.list_items().await?[0].category_name(), "Drafts");
        Ok(())
    }

    #[tokio::test]
    async fn search_over_loaded_items() -> Result<()> {
        let store = InMemoryItemStore::with_items(vec![
            item("q1", "What is X?", "X is Y", "Basics"),
            item("q2", "How to install?", "Run setup", "Setup"),
        ]);
        let mut manager = FaqManager::load(&store).await?;

        manager.catalog_mut().set_query("y");
        let view = manager.view();
        assert!(view.row("q1").unwrap().visible);
        assert!(view.row("q1").unwrap().answer.is_highlighted());
        assert!(!view.row("q1").unwrap().question.is_highlighted());
        assert!(!view.group("Setup").unwrap().visible);
        Ok(())
    }
}
