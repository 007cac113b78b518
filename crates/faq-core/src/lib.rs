//! FAQ catalog logic shared by the browser front end and native clients.
//!
//! Grouping, search/highlight and the view model are pure. [`FaqManager`]
//! adds the mutate-then-reload cycle over any [`faq_store_client::ItemStore`].

pub mod catalog;
pub mod draft;
pub mod error;
pub mod grouping;
pub mod manager;
pub mod search;
pub mod view;

pub use catalog::{Catalog, ReloadTicket};
pub use draft::{NewItemDraft, UidSource, validate_category_name};
pub use error::{FaqError, ValidationError};
pub use grouping::{CategoryGroup, CategoryRegistry, group_items, group_with_known};
pub use manager::FaqManager;
pub use search::{Highlighted, Query, Segment, escape_html};
pub use view::{CatalogView, Expansion, GroupView, RowView, ViewState};
