//! メインアプリケーションコンポーネント

use chess_photo_common::Surface;
use leptos::prelude::*;

use crate::components::{
    header::Header,
    image_preview::ImagePreview,
    loading_overlay::LoadingOverlay,
    result_panel::ResultPanel,
    upload_area::UploadArea,
    upload_form::UploadForm,
};
use crate::page_config;
use crate::session_handle::SessionHandle;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = StoredValue::new(page_config::load());
    let session = SessionHandle::new();

    let drop_zone_visible = move || session.with(|s| s.view().drop_zone_visible);
    let preview_visible = move || session.with(|s| s.view().preview_visible);
    let busy_visible = move || session.with(|s| s.view().busy_visible);
    let result_visible = move || session.with(|s| s.view().result_visible);

    // 入力画面は設定で選ぶ（処理は共通）
    let input_surface = match config.with_value(|c| c.surface) {
        Surface::Analyzer => view! {
            <Show when=drop_zone_visible>
                <UploadArea session=session config=config />
            </Show>
            <Show when=preview_visible>
                <ImagePreview session=session config=config />
            </Show>
        }
        .into_any(),
        Surface::Form => view! { <UploadForm session=session config=config /> }.into_any(),
    };

    view! {
        <div class="container">
            <Header />

            {input_surface}

            <Show when=busy_visible>
                <LoadingOverlay />
            </Show>

            <Show when=result_visible>
                <ResultPanel session=session config=config />
            </Show>
        </div>
    }
}
