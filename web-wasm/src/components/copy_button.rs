//! コピーボタン
//!
//! 成功時に一定時間「Copied!」を表示する

use chess_photo_common::CopyFeedback;
use leptos::prelude::*;

use crate::export::clipboard::copy_with_feedback;

#[component]
pub fn CopyButton(
    text: Signal<String>,
    #[prop(into)] label: String,
    feedback_ms: u32,
) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::new(label, "Copied!"));

    view! {
        <button
            type="button"
            class=move || {
                if feedback.with(|f| f.is_copied()) {
                    "btn btn-success btn-small"
                } else {
                    "btn btn-outline-secondary btn-small"
                }
            }
            on:click=move |_| copy_with_feedback(text.get_untracked(), feedback, feedback_ms)
        >
            {move || feedback.with(|f| f.label().to_string())}
        </button>
    }
}
