//! テキストファイルのダウンロード

use chess_photo_common::TextDownload;
use chrono::NaiveDate;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Object URL。dropで必ずrevokeする
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> Result<Self, String> {
        Url::create_object_url_with_blob(blob)
            .map(ObjectUrl)
            .map_err(|_| "Unable to create download".to_string())
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        Url::revoke_object_url(&self.0).ok();
    }
}

/// 今日の日付（UTC）
pub fn today_utc() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_utc_full_year() as i32,
        now.get_utc_month() + 1,
        now.get_utc_date(),
    )
}

/// ブラウザの保存処理を起動する
pub fn download_text(download: &TextDownload) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&download.content));
    let opts = BlobPropertyBag::new();
    opts.set_type(download.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = ObjectUrl::for_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Document unavailable")?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Unable to create anchor")?
        .dyn_into()
        .map_err(|_| "Anchor cast failed")?;
    anchor.set_href(url.as_str());
    anchor.set_download(&download.filename);
    anchor.click();

    Ok(())
}

/// PGNを `{prefix}_{日付}.pgn` で保存
pub fn download_pgn(pgn: &str, prefix: &str) -> Result<(), String> {
    let date = today_utc().ok_or("Invalid system date")?;
    download_text(&TextDownload::pgn(pgn, prefix, date))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_today_utc_is_valid() {
        assert!(today_utc().is_some());
    }

    #[wasm_bindgen_test]
    fn wasm_download_text_succeeds_repeatedly() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).expect("日付生成失敗");
        let download = TextDownload::pgn("1. e4 e5", "chess_position", date);
        for _ in 0..3 {
            download_text(&download).expect("ダウンロード失敗");
        }
    }

    #[wasm_bindgen_test]
    fn wasm_object_url_is_blob_url() {
        let parts = js_sys::Array::of1(&JsValue::from_str("x"));
        let blob = Blob::new_with_str_sequence(&parts).expect("Blob生成失敗");
        let url = ObjectUrl::for_blob(&blob).expect("URL生成失敗");
        assert!(url.as_str().starts_with("blob:"));
    }
}
