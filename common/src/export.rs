//! コピー・ダウンロード
//!
//! 実際のクリップボード書込みとファイル保存はWASM側で行う。
//! ここではボタン表示の復帰判定とファイル名生成だけを扱う。

use chrono::NaiveDate;

/// PGNファイルの拡張子
pub const PGN_EXTENSION: &str = "pgn";

/// コピーボタンの表示状態
///
/// コピーごとにチケットを発行し、最後に発行したチケットの
/// 復帰だけを反映する。元のラベルは生成時に固定する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    original: String,
    success: String,
    copied: bool,
    generation: u64,
}

/// 復帰タイマー用のチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreTicket(u64);

impl CopyFeedback {
    pub fn new(original: impl Into<String>, success: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            success: success.into(),
            copied: false,
            generation: 0,
        }
    }

    pub fn label(&self) -> &str {
        if self.copied {
            &self.success
        } else {
            &self.original
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// コピー成功時に呼ぶ
    pub fn mark_copied(&mut self) -> RestoreTicket {
        self.generation += 1;
        self.copied = true;
        RestoreTicket(self.generation)
    }

    /// クリップボード書込みの結果を反映する
    ///
    /// 失敗時は表示を変えず、以前のタイマーもそのまま有効
    pub fn record_copy(&mut self, copied: bool) -> Option<RestoreTicket> {
        copied.then(|| self.mark_copied())
    }

    /// タイマー発火時に呼ぶ。古いチケットなら何もしない
    pub fn restore(&mut self, ticket: RestoreTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.copied = false;
        true
    }
}

/// `{prefix}_{YYYY-MM-DD}.{ext}`
pub fn download_filename(prefix: &str, date: NaiveDate, extension: &str) -> String {
    format!("{}_{}.{}", prefix, date.format("%Y-%m-%d"), extension)
}

/// 保存するテキストファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDownload {
    pub filename: String,
    pub content: String,
    pub mime_type: &'static str,
}

impl TextDownload {
    pub fn new(content: impl Into<String>, prefix: &str, extension: &str, date: NaiveDate) -> Self {
        Self {
            filename: download_filename(prefix, date, extension),
            content: content.into(),
            mime_type: "text/plain",
        }
    }

    pub fn pgn(content: impl Into<String>, prefix: &str, date: NaiveDate) -> Self {
        Self::new(content, prefix, PGN_EXTENSION, date)
    }
}
