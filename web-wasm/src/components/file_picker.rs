//! ファイル選択ボタン
//!
//! labelで包んだinputを使うので、クリック時の処理は不要

use chess_photo_common::ClientConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::controller::acquire_file;
use crate::session_handle::SessionHandle;

#[component]
pub fn FilePicker(
    session: SessionHandle,
    config: StoredValue<ClientConfig>,
    #[prop(into)] label: String,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            acquire_file(session, &config.get_value(), file);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        <label class="btn btn-secondary file-picker">
            {label}
            <input
                type="file"
                accept="image/*"
                style="display: none"
                on:change=on_change
            />
        </label>
    }
}
