//! ページに埋め込まれた設定の読込
//!
//! `<script type="application/json" id="chess-photo-config">{...}</script>`
//! がなければデフォルト設定を使う。

use chess_photo_common::ClientConfig;
use gloo::console;

pub const CONFIG_ELEMENT_ID: &str = "chess-photo-config";

pub fn load() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(text) = text else {
        return ClientConfig::default();
    };

    match ClientConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            console::warn!(format!("invalid page config, using defaults: {}", e));
            ClientConfig::default()
        }
    }
}
