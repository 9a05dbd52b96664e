//! Backend Command Wrappers
//!
//! Frontend bindings to the task REST service. Transport failures and
//! non-success statuses are collapsed into one error path; callers only see
//! "the operation failed".

mod todo;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use todo::*;

/// Base URL of the task service, baked in at compile time.
pub fn api_base() -> &'static str {
    option_env!("TODO_API_BASE").unwrap_or("http://localhost:8000")
}

/// Issue a request, treating transport errors and non-2xx statuses alike.
pub(crate) async fn send(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let url = format!("{}{}", api_base(), path);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|_| format!("failed to build {method} {path}"))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| "failed to set request headers".to_string())?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| format!("{method} {path} failed"))?
        .into();

    if !response.ok() {
        return Err(format!("{method} {path} returned {}", response.status()));
    }
    Ok(response)
}

/// Read a response body as JSON.
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, String> {
    let text_promise = response
        .text()
        .map_err(|_| "failed to read response".to_string())?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| "failed to read response".to_string())?
        .as_string()
        .ok_or_else(|| "response body was not text".to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}
