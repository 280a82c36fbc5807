//! 解析サービスとの通信

pub mod fetch;

use wasm_bindgen::{JsCast, JsValue};

/// JsValueのエラーを読める文字列にする
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
