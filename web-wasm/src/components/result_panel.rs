//! 解析結果パネル
//!
//! 盤面・FEN・要約・読み筋・PGN を表示する

use chess_photo_common::ClientConfig;
use gloo::console;
use leptos::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::components::variation_list::VariationList;
use crate::export::download::download_pgn;
use crate::session_handle::SessionHandle;

#[component]
pub fn ResultPanel(session: SessionHandle, config: StoredValue<ClientConfig>) -> impl IntoView {
    let fen = Signal::derive(move || session.with(|s| s.rendered().fen.clone()));
    let pgn = Signal::derive(move || session.with(|s| s.rendered().pgn.clone()));
    let summary = move || session.with(|s| s.rendered().summary.clone());
    let board_svg = move || session.with(|s| s.rendered().board_svg.clone().unwrap_or_default());
    let has_variations = move || session.with(|s| !s.rendered().variations.is_empty());

    let feedback_ms = config.with_value(|c| c.copy_feedback_ms);

    let on_download = move |_| {
        let prefix = config.with_value(|c| c.download_prefix.clone());
        if let Err(e) = download_pgn(&pgn.get_untracked(), &prefix) {
            console::error!(format!("PGN download failed: {}", e));
        }
    };

    view! {
        <section class="results">
            <div class="board" inner_html=board_svg />

            <div class="form-group">
                <label for="fen-result">"FEN"</label>
                <div class="input-group">
                    <input id="fen-result" type="text" readonly prop:value=move || fen.get() />
                    <CopyButton text=fen label="Copy" feedback_ms=feedback_ms />
                </div>
            </div>

            <div class="analysis">
                <h5>"Analysis"</h5>
                <p class="analysis-summary">{summary}</p>
                <Show when=has_variations>
                    <VariationList session=session />
                </Show>
            </div>

            <div class="form-group">
                <label for="pgn-text">"PGN"</label>
                <textarea id="pgn-text" rows="6" readonly prop:value=move || pgn.get() />
                <div class="pgn-actions">
                    <CopyButton text=pgn label="Copy PGN" feedback_ms=feedback_ms />
                    <button
                        type="button"
                        class="btn btn-outline-primary btn-small"
                        disabled=move || pgn.with(|p| p.is_empty())
                        on:click=on_download
                    >
                        "Download PGN"
                    </button>
                </div>
            </div>
        </section>
    }
}
