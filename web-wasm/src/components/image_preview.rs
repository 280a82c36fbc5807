//! 選択画像のプレビュー

use chess_photo_common::ClientConfig;
use leptos::prelude::*;

use crate::components::analyze_button::AnalyzeButton;
use crate::components::file_picker::FilePicker;
use crate::session_handle::SessionHandle;

#[component]
pub fn ImagePreview(session: SessionHandle, config: StoredValue<ClientConfig>) -> impl IntoView {
    let preview_src = move || session.with(|s| s.view().preview_src.clone().unwrap_or_default());
    let file_name = move || {
        session.with(|s| s.selected().map(|f| f.name.clone()).unwrap_or_default())
    };

    view! {
        <div class="preview">
            <img class="preview-image" src=preview_src alt=file_name />
            <div class="preview-actions">
                <FilePicker session=session config=config label="Choose another image" />
                <AnalyzeButton session=session config=config />
            </div>
        </div>
    }
}
