//! Catalog rendering.
//!
//! Rebuilds the category container and the category selector from the
//! current [`faq_core::CatalogView`]. No diffing: every call starts from an
//! empty container. Behaviour is attached separately in `events.rs` via the
//! `data-action` attributes set here.

use crate::dom::{self, Elements};
use crate::state;
use faq_core::{GroupView, RowView};
use wasm_bindgen::JsCast;

pub const ACTION_TOGGLE_CATEGORY: &str = "toggle-category";
pub const ACTION_DELETE_CATEGORY: &str = "delete-category";
pub const ACTION_TOGGLE_ANSWER: &str = "toggle-answer";
pub const ACTION_DELETE_QUESTION: &str = "delete-question";

/// Render the category cards and the selector.
pub fn render(els: &Elements) {
    let view = state::with(|c| c.view());

    let container = &els.categories_container;
    dom::set_inner_html(container, "");
    for group in &view.groups {
        container.append_child(&render_group(group)).unwrap();
    }

    render_category_select(els);
}

fn render_group(group: &GroupView) -> web_sys::Element {
    let card = dom::create_with_class("div", "card");
    card.set_attribute("data-category", &group.name).unwrap();
    dom::set_shown(&card, group.visible);

    let header = dom::create_element("h2");
    dom::set_text(&header, &group.name);
    header.set_attribute("data-action", ACTION_TOGGLE_CATEGORY).unwrap();
    header.set_attribute("data-category", &group.name).unwrap();
    card.append_child(&header).unwrap();

    let questions = dom::create_with_class("div", "questions");
    dom::set_shown(&questions, group.expansion.is_expanded());
    for row in &group.rows {
        questions.append_child(&render_row(row)).unwrap();
    }
    card.append_child(&questions).unwrap();

    if group.deletable {
        let delete = dom::create_with_class("button", "delete-category-button");
        dom::set_text(&delete, "Delete Category");
        delete.set_attribute("data-action", ACTION_DELETE_CATEGORY).unwrap();
        delete.set_attribute("data-category", &group.name).unwrap();
        card.append_child(&delete).unwrap();
    }

    card
}

fn render_row(row: &RowView) -> web_sys::Element {
    let el = dom::create_with_class("div", "question");
    dom::toggle_class(&el, "clicked", row.activated);
    el.set_attribute("data-action", ACTION_TOGGLE_ANSWER).unwrap();
    el.set_attribute("data-uid", &row.uid).unwrap();
    dom::set_shown(&el, row.visible);

    // Highlighted::to_html escapes the item text.
    let question = dom::create_element("h3");
    dom::set_inner_html(&question, &row.question.to_html());
    el.append_child(&question).unwrap();

    let answer = dom::create_with_class("div", "answer");
    dom::set_inner_html(&answer, &row.answer.to_html());
    dom::set_shown(&answer, row.expansion.is_expanded());
    el.append_child(&answer).unwrap();

    let delete = dom::create_with_class("button", "delete-button");
    dom::set_text(&delete, "Delete");
    delete.set_attribute("data-action", ACTION_DELETE_QUESTION).unwrap();
    delete.set_attribute("data-uid", &row.uid).unwrap();
    el.append_child(&delete).unwrap();

    el
}

/// Rebuild the category `<select>`, keeping the current choice when it still exists.
pub fn render_category_select(els: &Elements) {
    let sel = &els.question_category;
    let current = dom::get_select_value(sel);
    dom::set_inner_html(sel.unchecked_ref(), "");

    let options = state::with(|c| c.category_options().to_vec());
    for name in &options {
        let opt = dom::create_option(name, name, *name == current);
        sel.append_child(&opt).unwrap();
    }
    if options.iter().any(|n| *n == current) {
        dom::set_select_value(sel, &current);
    }
}
