//! fetch APIによるmultipart送信
//!
//! タイムアウトはAbortControllerで実装する（0なら無効）。

use std::cell::Cell;
use std::rc::Rc;

use chess_photo_common::{Error, FilePart, HttpReply, Result, Transport};
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};

use crate::api::describe_js_error;

pub struct FetchTransport {
    timeout_ms: u32,
}

impl FetchTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl Transport for FetchTransport {
    async fn post_multipart(&self, url: &str, part: FilePart<'_>) -> Result<HttpReply> {
        let timed_out = Rc::new(Cell::new(false));

        post_form(url, part, self.timeout_ms, timed_out.clone())
            .await
            .map_err(|e| {
                if timed_out.get() {
                    Error::Network(format!("request timed out after {} ms", self.timeout_ms))
                } else {
                    Error::Network(describe_js_error(&e))
                }
            })
    }
}

/// ファイル1つだけのFormDataを作る
fn build_form_data(part: FilePart<'_>) -> std::result::Result<FormData, JsValue> {
    let bytes = js_sys::Uint8Array::from(part.file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);

    let opts = BlobPropertyBag::new();
    opts.set_type(&part.file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(part.field_name, &blob, &part.file.name)?;
    Ok(form)
}

async fn post_form(
    url: &str,
    part: FilePart<'_>,
    timeout_ms: u32,
    timed_out: Rc<Cell<bool>>,
) -> std::result::Result<HttpReply, JsValue> {
    let form = build_form_data(part)?;
    let controller = AbortController::new()?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);
    opts.set_signal(Some(&controller.signal()));

    let request = Request::new_with_str_and_init(url, &opts)?;

    // 本文を読み終えるまで保持する（dropでタイマー解除）
    let _deadline = (timeout_ms > 0).then(|| {
        let controller = controller.clone();
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    });

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let body = JsFuture::from(resp.text()?).await?;

    Ok(HttpReply {
        status,
        body: body.as_string().unwrap_or_default(),
    })
}
