//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Chess Photo to FEN"</h1>
            <p class="text-muted">"Upload a photo of a chess position to get its FEN, PGN and engine lines"</p>
        </header>
    }
}
