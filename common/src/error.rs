//! エラー型定義
//!
//! 各エラーはユーザー操作に最も近い場所で処理される。
//! `is_surfaced` が true のものだけがアラートとして表示される。

use thiserror::Error;

/// 解析失敗時の汎用メッセージ
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during analysis";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// ファイル検証エラー（サイズ超過・読込失敗）
    #[error("Validation error: {0}")]
    Validation(String),

    /// 送信できない、またはレスポンスを読めない
    #[error("Network error: {0}")]
    Network(String),

    /// サービスが失敗を返した（メッセージはサービス提供のもの）
    #[error("{0}")]
    Service(String),

    /// クリップボード書込み拒否
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// サービスのメッセージ、なければ汎用メッセージでServiceエラーを作る
    pub fn service(message: Option<String>) -> Self {
        match message {
            Some(m) if !m.trim().is_empty() => Error::Service(m),
            _ => Error::Service(GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    /// アラート表示するか（Clipboardはログのみ）
    pub fn is_surfaced(&self) -> bool {
        !matches!(self, Error::Clipboard(_))
    }

    /// アラートに表示する文言
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(msg) => msg.clone(),
            Error::Network(_) | Error::Json(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            Error::Service(msg) => format!("Error: {}", msg),
            Error::Clipboard(msg) => msg.clone(),
            Error::Config(msg) => format!("Configuration error: {}", msg),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error = Error::Validation("file too large".to_string());
        assert_eq!(format!("{}", error), "Validation error: file too large");
    }

    #[test]
    fn test_error_display_service_is_verbatim() {
        let error = Error::Service("no position found".to_string());
        assert_eq!(format!("{}", error), "no position found");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_service_fallback_message() {
        let error = Error::service(None);
        assert!(matches!(&error, Error::Service(m) if m == GENERIC_FAILURE_MESSAGE));

        // 空文字もフォールバック
        let error = Error::service(Some("  ".to_string()));
        assert!(matches!(&error, Error::Service(m) if m == GENERIC_FAILURE_MESSAGE));
    }

    #[test]
    fn test_user_message_contains_service_text() {
        let error = Error::service(Some("no position found".to_string()));
        assert!(error.user_message().contains("no position found"));
    }

    #[test]
    fn test_network_message_is_generic() {
        let error = Error::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_clipboard_is_not_surfaced() {
        assert!(!Error::Clipboard("denied".to_string()).is_surfaced());
        assert!(Error::Network("x".to_string()).is_surfaced());
        assert!(Error::Validation("x".to_string()).is_surfaced());
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Config("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Config"));
        assert!(debug.contains("テスト"));
    }
}
