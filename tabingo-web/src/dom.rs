//! Thin browser plumbing shared by storage, identity and the API layer.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is
/// unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or
/// `localStorage` is unavailable (e.g. blocked by privacy settings).
pub fn local_storage() -> Result<Storage, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Current value of one query parameter from the page URL.
///
/// Returns `None` outside a browser or when the parameter is absent.
#[must_use]
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(name)
}

/// Rewrite the page URL in place (no reload, history entry replaced) so
/// that `name=value` is present; `None` removes the parameter.
///
/// # Errors
/// Returns an error if the history API rejects the replacement.
pub fn replace_query_param(name: &str, value: Option<&str>) -> Result<(), JsValue> {
    let location = window().location();
    let pathname = location.pathname()?;
    let search = location.search()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search)?;
    match value {
        Some(value) => params.set(name, value),
        None => params.delete(name),
    }
    let query: String = params.to_string().into();
    let url = if query.is_empty() {
        pathname
    } else {
        format!("{pathname}?{query}")
    };
    window()
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be
/// converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let resp_value = JsFuture::from(window().fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Fetch a URL and deserialize its JSON body.
///
/// # Errors
/// Returns an error on network failure, non-success status, or a body
/// that does not match `T`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_json<T>(url: &str) -> Result<T, JsValue>
where
    T: serde::de::DeserializeOwned,
{
    let response = fetch_response(url).await?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "request to {url} failed with status {}",
            response.status()
        )));
    }
    let body = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(body).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// POST a JSON payload and deserialize the JSON response body.
///
/// # Errors
/// Returns an error on network failure, non-success status, or a body
/// that does not match `T`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn post_json_response<T>(url: &str, payload: &serde_json::Value) -> Result<T, JsValue>
where
    T: serde::de::DeserializeOwned,
{
    let response = post_request(url, payload).await?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "post to {url} failed with status {}",
            response.status()
        )));
    }
    let body = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(body).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// POST a JSON payload, ignoring the response body.
///
/// # Errors
/// Returns an error if the request cannot be sent or the server answers
/// with a non-success status.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn post_json(url: &str, payload: &serde_json::Value) -> Result<(), JsValue> {
    let response = post_request(url, payload).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(JsValue::from_str(&format!(
            "post to {url} failed with status {}",
            response.status()
        )))
    }
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn post_request(url: &str, payload: &serde_json::Value) -> Result<Response, JsValue> {
    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&payload.to_string()));
    let request = web_sys::Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Content-Type", "application/json")?;
    let resp_value = JsFuture::from(window().fetch_with_request(&request)).await?;
    resp_value.dyn_into::<Response>()
}
