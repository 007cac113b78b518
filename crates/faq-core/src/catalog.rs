//! Client-side catalog state.
//!
//! Holds the last fetched snapshot, the known categories and the view state.
//! Reloads are tagged with a generation so that only the most recently issued
//! reload may replace the snapshot.

use crate::draft::{NewItemDraft, UidSource, validate_category_name};
use crate::error::ValidationError;
use crate::grouping::{CategoryGroup, CategoryRegistry, group_with_known};
use crate::view::{CatalogView, Expansion, ViewState};
use faq_api_types::{CreateItemRequest, Item};
use tracing::debug;

/// Issued by [`Catalog::begin_reload`]; redeemed by [`Catalog::apply_snapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReloadTicket(u64);

#[derive(Debug, Default)]
pub struct Catalog {
    snapshot: Vec<Item>,
    registry: CategoryRegistry,
    state: ViewState,
    uids: UidSource,
    generation: u64,
}

impl Catalog {
    pub fn snapshot(&self) -> &[Item] {
        &self.snapshot
    }

    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.generation += 1;
        ReloadTicket(self.generation)
    }

    /// Install a fetched item list. Returns `false` and leaves the catalog
    /// untouched when a newer reload has been issued since `ticket`.
    pub fn apply_snapshot(&mut self, ticket: ReloadTicket, items: Vec<Item>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "discarding stale snapshot (generation {} < {})",
                ticket.0, self.generation
            );
            return false;
        }
        self.registry.observe(&items);
        self.snapshot = items;
        let groups = self.groups();
        self.state.retain(&groups);
        true
    }

    pub fn groups(&self) -> Vec<CategoryGroup> {
        group_with_known(self.registry.names(), &self.snapshot)
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::build(&self.groups(), &self.state)
    }

    /// Names offered by the category selector.
    pub fn category_options(&self) -> &[String] {
        self.registry.names()
    }

    pub fn query(&self) -> &str {
        self.state.query().as_str()
    }

    pub fn set_query(&mut self, raw: &str) {
        self.state.set_query(raw);
    }

    pub fn toggle_group(&mut self, name: &str) -> Expansion {
        self.state.toggle_group(name)
    }

    pub fn toggle_row(&mut self, uid: &str) -> Expansion {
        self.state.toggle_row(uid)
    }

    /// Local-only: make a new category selectable. Returns the trimmed name.
    pub fn add_category(&mut self, raw: &str) -> Result<String, ValidationError> {
        let name = validate_category_name(raw)?;
        self.registry.insert(name);
        Ok(name.to_owned())
    }

    /// Called once the store confirmed deletion of the whole category.
    pub fn forget_category(&mut self, name: &str) {
        self.registry.remove(name);
    }

    pub fn prepare_item(
        &mut self,
        draft: &NewItemDraft,
        now_ms: u64,
    ) -> Result<CreateItemRequest, ValidationError> {
        draft.validate()?;
        draft.into_request(self.uids.next(now_ms))
    }
}
