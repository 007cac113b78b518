//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The catalog owns the item snapshot, known categories and view state;
//! everything on screen is rebuilt from it.

use faq_core::Catalog;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;

thread_local! {
    static CATALOG: RefCell<Catalog> = RefCell::new(Catalog::default());
    static SEARCH_DEBOUNCE: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

/// Run a closure with shared read access to the catalog.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&Catalog) -> R,
{
    CATALOG.with(|c| f(&c.borrow()))
}

/// Run a closure with mutable access to the catalog.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Catalog) -> R,
{
    CATALOG.with(|c| f(&mut c.borrow_mut()))
}

/// Replace the pending search timer. Dropping the old one cancels it.
pub fn set_search_debounce(timer: Timeout) {
    SEARCH_DEBOUNCE.with(|t| *t.borrow_mut() = Some(timer));
}
