//! シンプルなアップロードフォーム
//!
//! ドロップエリアの代わりに使う入力画面。処理は同じ。

use chess_photo_common::ClientConfig;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::controller::{acquire_file, start_analysis};
use crate::session_handle::SessionHandle;

#[component]
pub fn UploadForm(session: SessionHandle, config: StoredValue<ClientConfig>) -> impl IntoView {
    let preview_visible = move || session.with(|s| s.view().preview_visible);
    let preview_src = move || session.with(|s| s.view().preview_src.clone().unwrap_or_default());
    let can_analyze = move || session.with(|s| s.can_analyze());

    let on_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            acquire_file(session, &config.get_value(), file);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        start_analysis(session, config.get_value());
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <div class="form-group">
                <label for="image-file">"Chess position photo"</label>
                <input id="image-file" type="file" accept="image/*" on:change=on_change />
            </div>
            <button type="submit" class="btn btn-primary" disabled=move || !can_analyze()>
                {move || if session.with(|s| s.is_busy()) { "Analyzing..." } else { "Analyze" }}
            </button>
        </form>
        <Show when=preview_visible>
            <img class="original-image" src=preview_src alt="Original image" />
        </Show>
    }
}
