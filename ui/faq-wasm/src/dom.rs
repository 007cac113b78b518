//! DOM element bindings.
//!
//! All fields are resolved once at startup. To add new UI elements, add a
//! field here and bind it in `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

pub fn set_select_value(el: &HtmlSelectElement, val: &str) {
    el.set_value(val);
}

pub fn get_textarea_value(el: &HtmlTextAreaElement) -> String {
    el.value().trim().to_string()
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

/// Show or hide via inline `display`, matching the stylesheet's block layout.
pub fn set_shown(el: &Element, shown: bool) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html
            .style()
            .set_property("display", if shown { "block" } else { "none" });
    }
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

/// `<tag class="...">` in one call.
pub fn create_with_class(tag: &str, cls: &str) -> Element {
    let el = create_element(tag);
    el.set_class_name(cls);
    el
}

pub fn create_option(value: &str, text: &str, selected: bool) -> HtmlOptionElement {
    let opt: HtmlOptionElement = create_element("option").dyn_into().unwrap();
    opt.set_value(value);
    opt.set_text_content(Some(text));
    opt.set_selected(selected);
    opt
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

/// Blocking `window.alert`.
pub fn alert(msg: &str) {
    let _ = window().alert_with_message(msg);
}

// ── Elements struct ──

/// All DOM element references used by the FAQ page.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Listing
    pub categories_container: Element,
    pub search_box: HtmlInputElement,

    // Add question form
    pub new_question: HtmlInputElement,
    pub new_answer: HtmlTextAreaElement,
    pub question_category: HtmlSelectElement,
    pub add_question_btn: HtmlElement,

    // Add category
    pub new_category: HtmlInputElement,
    pub add_category_btn: HtmlElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_typed {
    ($ty:ty, $id:expr) => {
        by_id_typed::<$ty>($id).ok_or_else(|| {
            JsValue::from_str(&format!("missing {} #{}", stringify!($ty), $id))
        })?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after the document is parsed.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            categories_container: get_el!("categoriesContainer"),
            search_box: get_typed!(HtmlInputElement, "searchBox"),

            new_question: get_typed!(HtmlInputElement, "newQuestion"),
            new_answer: get_typed!(HtmlTextAreaElement, "newAnswer"),
            question_category: get_typed!(HtmlSelectElement, "questionCategory"),
            add_question_btn: get_typed!(HtmlElement, "addQuestionBtn"),

            new_category: get_typed!(HtmlInputElement, "newCategory"),
            add_category_btn: get_typed!(HtmlElement, "addCategoryBtn"),
        })
    }
}
