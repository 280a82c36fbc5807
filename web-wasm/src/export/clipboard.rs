//! クリップボードへのコピー
//!
//! 失敗はconsoleに出すだけで、呼び出し元には bool で返す。

use chess_photo_common::{CopyFeedback, Error, Result};
use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::api::describe_js_error;

async fn write_clipboard(text: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::Clipboard("window unavailable".into()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| Error::Clipboard(describe_js_error(&e)))
}

/// テキストをコピーし、成功したかを返す
pub async fn copy_text(text: &str) -> bool {
    match write_clipboard(text).await {
        Ok(()) => true,
        Err(e) => {
            console::error!(format!("Failed to copy text: {}", e));
            false
        }
    }
}

/// コピーしてボタン表示を一定時間切り替える
///
/// 復帰タイマーはコピーごとに作るが、反映されるのは最後の1つだけ
pub fn copy_with_feedback(text: String, feedback: RwSignal<CopyFeedback>, feedback_ms: u32) {
    spawn_local(async move {
        let copied = copy_text(&text).await;
        let Some(ticket) = feedback.try_update(|f| f.record_copy(copied)).flatten() else {
            return;
        };
        Timeout::new(feedback_ms, move || {
            feedback.try_update(|f| f.restore(ticket));
        })
        .forget();
    });
}
