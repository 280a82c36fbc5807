//! 解析中オーバーレイ

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="loading-backdrop" />
        <div class="loading">
            <div class="spinner" />
            <p class="loading-text">"Analyzing position..."</p>
        </div>
    }
}
