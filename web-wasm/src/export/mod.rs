//! コピー・ダウンロード（ブラウザ側）

pub mod clipboard;
pub mod download;
