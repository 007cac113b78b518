//! Item store operations.
//!
//! Each mutation validates locally first, issues one request, and on success
//! reloads the whole catalog. Failures are logged; the view keeps showing the
//! previous snapshot.

use crate::api;
use crate::catalog_view;
use crate::dom::{self, Elements};
use crate::state;
use faq_api_types::ItemSelector;
use faq_core::NewItemDraft;

/// GET /items, then re-render if no newer reload was issued meanwhile.
pub async fn load_questions(els: &Elements) {
    let ticket = state::with_mut(|c| c.begin_reload());
    match api::fetch_items().await {
        Ok(items) => {
            let count = items.len();
            if state::with_mut(|c| c.apply_snapshot(ticket, items)) {
                gloo_console::debug!(format!("loaded {} questions", count));
                catalog_view::render(els);
            } else {
                gloo_console::debug!("discarded stale question list");
            }
        }
        Err(e) => gloo_console::error!("Error loading questions:", e),
    }
}

/// POST /items
pub async fn on_add_question(els: &Elements) {
    let draft = NewItemDraft::new(
        dom::get_input_value(&els.new_question),
        dom::get_textarea_value(&els.new_answer),
        dom::get_select_value(&els.question_category),
    );

    let now_ms = js_sys::Date::now() as u64;
    let req = match state::with_mut(|c| c.prepare_item(&draft, now_ms)) {
        Ok(req) => req,
        Err(e) => {
            dom::alert(&e.to_string());
            return;
        }
    };

    els.new_question.set_value("");
    els.new_answer.set_value("");

    match api::create_item(&req).await {
        Ok(()) => load_questions(els).await,
        Err(e) => gloo_console::error!(format!("Error adding question {}:", req.uid), e),
    }
}

/// DELETE /items?uid=…
pub async fn on_delete_question(els: &Elements, uid: &str) {
    match api::delete_items(&ItemSelector::Uid(uid.to_string())).await {
        Ok(()) => load_questions(els).await,
        Err(e) => gloo_console::error!("Error deleting question:", e),
    }
}

/// DELETE /items?category=…
pub async fn on_delete_category(els: &Elements, category: &str) {
    match api::delete_items(&ItemSelector::Category(category.to_string())).await {
        Ok(()) => {
            state::with_mut(|c| c.forget_category(category));
            load_questions(els).await;
        }
        Err(e) => gloo_console::error!("Error deleting category:", e),
    }
}

/// Local only: the category is not stored until a question uses it.
pub fn on_add_category(els: &Elements) {
    let raw = dom::get_input_value(&els.new_category);
    match state::with_mut(|c| c.add_category(&raw)) {
        Ok(name) => {
            els.new_category.set_value("");
            catalog_view::render(els);
            dom::set_select_value(&els.question_category, &name);
        }
        Err(e) => dom::alert(&e.to_string()),
    }
}

/// Apply the search box contents and re-render.
pub fn on_search(els: &Elements) {
    let query = els.search_box.value();
    state::with_mut(|c| c.set_query(&query));
    catalog_view::render(els);
}

pub fn on_toggle_category(els: &Elements, category: &str) {
    state::with_mut(|c| c.toggle_group(category));
    catalog_view::render(els);
}

pub fn on_toggle_answer(els: &Elements, uid: &str) {
    state::with_mut(|c| c.toggle_row(uid));
    catalog_view::render(els);
}
