//! HTTP client for the item store.
//!
//! Wraps `fetch` for the `/items` endpoints. `base_url()` reads the store
//! location from the page, falling back to the public store.

use crate::dom;
use faq_api_types::{CreateItemRequest, DEFAULT_STORE_URL, Item, ItemSelector};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// Determine the item store base URL.
///
/// Priority: `data-store-url` on `#categoriesContainer` → [`DEFAULT_STORE_URL`].
pub fn base_url() -> String {
    dom::by_id("categoriesContainer")
        .and_then(|el| el.get_attribute("data-store-url"))
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_STORE_URL.to_string())
}

/// Perform a fetch request, returning the response body on 2xx.
pub async fn request(path: &str, method: &str, body: Option<String>) -> Result<String, String> {
    let url = format!("{}{}", base_url(), path);

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;

    if let Some(ref b) = body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{:?}", e))?;
        opts.set_body(&JsValue::from_str(b));
    }

    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(dom::window().fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;

    let text_str = text.as_string().unwrap_or_default();

    if !resp.ok() {
        return Err(format!("{} {}: {}", resp.status(), resp.status_text(), text_str));
    }

    Ok(text_str)
}

/// GET /items
pub async fn fetch_items() -> Result<Vec<Item>, String> {
    let text = request("/items", "GET", None).await?;
    serde_json::from_str(&text).map_err(|e| format!("JSON parse error: {} (raw: {})", e, text))
}

/// POST /items
pub async fn create_item(req: &CreateItemRequest) -> Result<(), String> {
    let body = serde_json::to_string(req).map_err(|e| e.to_string())?;
    request("/items", "POST", Some(body)).await.map(|_| ())
}

/// DELETE /items?uid=… or DELETE /items?category=…
pub async fn delete_items(selector: &ItemSelector) -> Result<(), String> {
    let (key, value) = selector.query_pair();
    let encoded = String::from(js_sys::encode_uri_component(value));
    request(&format!("/items?{}={}", key, encoded), "DELETE", None)
        .await
        .map(|_| ())
}
