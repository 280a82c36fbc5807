//! 解析ボタン
//!
//! 送信中は無効化し、同時に2件送らない

use chess_photo_common::ClientConfig;
use leptos::prelude::*;

use crate::controller::start_analysis;
use crate::session_handle::SessionHandle;

#[component]
pub fn AnalyzeButton(session: SessionHandle, config: StoredValue<ClientConfig>) -> impl IntoView {
    let is_busy = move || session.with(|s| s.is_busy());
    let can_analyze = move || session.with(|s| s.can_analyze());

    view! {
        <button
            type="button"
            class="btn btn-primary"
            disabled=move || !can_analyze()
            on:click=move |_| start_analysis(session, config.get_value())
        >
            {move || if is_busy() { "Analyzing..." } else { "Analyze" }}
        </button>
    }
}
