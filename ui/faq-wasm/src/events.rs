//! Event binding.
//!
//! Listeners are registered once on elements that survive re-renders. Clicks
//! inside the category container are dispatched on the nearest
//! `data-action` attribute, so rendering never wires handlers itself.

use crate::catalog_view::{
    ACTION_DELETE_CATEGORY, ACTION_DELETE_QUESTION, ACTION_TOGGLE_ANSWER, ACTION_TOGGLE_CATEGORY,
};
use crate::dom::Elements;
use crate::faq_ops;
use crate::state;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const SEARCH_DEBOUNCE_MS: u32 = 150;

/// Helper: attach async click handler to an HtmlElement.
macro_rules! on_click_async {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&els2).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Helper: attach sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Forms ──
    on_click_async!(els.add_question_btn, els, faq_ops::on_add_question);
    {
        let els2 = els.clone();
        on_click!(els.add_category_btn, move |_: web_sys::MouseEvent| {
            faq_ops::on_add_category(&els2);
        });
    }

    // ── Search (debounced) ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let els3 = els2.clone();
            state::set_search_debounce(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                faq_ops::on_search(&els3);
            }));
        }) as Box<dyn FnMut(_)>);
        els.search_box
            .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Category container (delegated) ──
    {
        let els2 = els.clone();
        on_click!(els.categories_container, move |e: web_sys::MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };
            let Some(action_el) = target.closest("[data-action]").ok().flatten() else {
                return;
            };
            dispatch(&els2, &action_el);
        });
    }
}

fn dispatch(els: &Elements, action_el: &web_sys::Element) {
    let action = action_el.get_attribute("data-action").unwrap_or_default();
    let uid = action_el.get_attribute("data-uid").unwrap_or_default();
    let category = action_el.get_attribute("data-category").unwrap_or_default();

    match action.as_str() {
        ACTION_TOGGLE_CATEGORY => faq_ops::on_toggle_category(els, &category),
        ACTION_TOGGLE_ANSWER => faq_ops::on_toggle_answer(els, &uid),
        ACTION_DELETE_QUESTION => {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                faq_ops::on_delete_question(&els2, &uid).await;
            });
        }
        ACTION_DELETE_CATEGORY => {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                faq_ops::on_delete_category(&els2, &category).await;
            });
        }
        other => gloo_console::warn!(format!("unknown action {:?}", other)),
    }
}
