//! Browser Transport
//!
//! `CartTransport` on top of `window.fetch`.

use futures::FutureExt;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

use super::{CartRequest, CartResponse, CartTransport, PendingResponse};
use crate::error::CartError;

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl CartTransport for FetchTransport {
    fn send(&self, request: CartRequest) -> PendingResponse {
        // fetch() starts the request right away; only the response is awaited
        let dispatched = start_fetch(&request);
        async move {
            let response: Response = JsFuture::from(dispatched?)
                .await
                .map_err(network_error)?
                .dyn_into()
                .map_err(network_error)?;
            let status = response.status();
            let text = JsFuture::from(response.text().map_err(network_error)?)
                .await
                .map_err(network_error)?;
            Ok::<_, CartError>(CartResponse {
                status,
                body: text.as_string().unwrap_or_default(),
            })
        }
        .boxed_local()
    }
}

fn start_fetch(request: &CartRequest) -> Result<Promise, CartError> {
    let window = web_sys::window().ok_or_else(|| CartError::Network("no window".into()))?;

    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    // The cart id lives in a cookie
    init.set_credentials(RequestCredentials::SameOrigin);
    if let Some(content_type) = request.content_type {
        let headers = Headers::new().map_err(network_error)?;
        headers.set("Content-Type", content_type).map_err(network_error)?;
        init.set_headers(&headers);
    }
    if let Some(body) = &request.body {
        init.set_body(&JsValue::from_str(body));
    }

    let req = Request::new_with_str_and_init(&request.path, &init).map_err(network_error)?;
    Ok(window.fetch_with_request(&req))
}

fn network_error(value: JsValue) -> CartError {
    let detail = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    };
    CartError::Network(detail)
}
