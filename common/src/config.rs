//! クライアント設定
//!
//! ページに埋め込んだJSONで上書きできる。環境変数やファイルは読まない。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 解析サービスのエンドポイント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// POST /upload（フィールド名 `file`、全データを返す）
    #[default]
    Upload,
    /// POST /analyze（フィールド名 `image`、FENのみ）
    Analyze,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Upload => "/upload",
            Endpoint::Analyze => "/analyze",
        }
    }

    /// multipartのファイルフィールド名
    pub fn field_name(&self) -> &'static str {
        match self {
            Endpoint::Upload => "file",
            Endpoint::Analyze => "image",
        }
    }
}

/// 表示する入力画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// ドラッグ&ドロップ + ファイル選択
    #[default]
    Analyzer,
    /// シンプルなアップロードフォーム
    Form,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// エンドポイントの前に付くパス（例: "/api"）
    pub api_base: String,
    pub endpoint: Endpoint,
    pub surface: Surface,
    /// 0でタイムアウトなし
    pub request_timeout_ms: u32,
    pub copy_feedback_ms: u32,
    pub max_upload_bytes: u64,
    pub download_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            endpoint: Endpoint::Upload,
            surface: Surface::Analyzer,
            request_timeout_ms: 60_000,
            copy_feedback_ms: 2_000,
            max_upload_bytes: 16 * 1024 * 1024, // サービス側の上限と同じ
            download_prefix: "chess_position".into(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.download_prefix.trim().is_empty() {
            return Err(Error::Config("download_prefix must not be empty".into()));
        }
        if self.max_upload_bytes == 0 {
            return Err(Error::Config("max_upload_bytes must be positive".into()));
        }
        Ok(())
    }

    /// 送信先URL
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), self.endpoint.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, Endpoint::Upload);
        assert_eq!(config.copy_feedback_ms, 2000);
        assert_eq!(config.endpoint_url(), "/upload");
    }

    #[test]
    fn test_from_json_partial() {
        let config = ClientConfig::from_json(r#"{"api_base": "/api/", "endpoint": "analyze"}"#)
            .expect("設定パース失敗");
        assert_eq!(config.endpoint, Endpoint::Analyze);
        assert_eq!(config.endpoint_url(), "/api/analyze");
        // 未指定はデフォルト
        assert_eq!(config.download_prefix, "chess_position");
        assert_eq!(config.surface, Surface::Analyzer);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = ClientConfig::from_json("{not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_rejects_empty_prefix() {
        let result = ClientConfig::from_json(r#"{"download_prefix": ""}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Endpoint::Upload.field_name(), "file");
        assert_eq!(Endpoint::Analyze.field_name(), "image");
    }
}
