//! APIレスポンスパーサー
//!
//! /upload と /analyze のレスポンスをAnalysisResultに変換する。
//!
//! - 2xxだが本文が読めない → Network
//! - 2xx以外、または `success: false` → Service（サービスのメッセージ優先）

use serde::Deserialize;

use crate::config::Endpoint;
use crate::error::{Error, Result};
use crate::types::{AnalysisResult, Variation};

/// /upload レスポンス
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UploadResponse {
    success: bool,
    fen: Option<String>,
    board_svg: Option<String>,
    analysis_summary: Option<String>,
    pgn: Option<String>,
    variations: Option<Vec<Variation>>,
    error: Option<String>,
}

/// /analyze レスポンス
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnalyzeResponse {
    fen: Option<String>,
    error: Option<String>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// エンドポイントに応じてレスポンスをパース
pub fn parse_response(endpoint: Endpoint, status: u16, body: &str) -> Result<AnalysisResult> {
    match endpoint {
        Endpoint::Upload => parse_upload_response(status, body),
        Endpoint::Analyze => parse_analyze_response(status, body),
    }
}

/// /upload レスポンスをパース
///
/// HTTPステータスより `success` フラグを優先する
pub fn parse_upload_response(status: u16, body: &str) -> Result<AnalysisResult> {
    let response: UploadResponse = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) if is_success(status) => {
            return Err(Error::Network(format!("unreadable response: {}", e)));
        }
        Err(_) => return Err(Error::service(None)),
    };

    if !response.success {
        return Err(Error::service(response.error));
    }

    Ok(AnalysisResult {
        fen: response.fen.unwrap_or_default(),
        pgn: response.pgn,
        analysis_summary: response.analysis_summary,
        variations: response.variations,
        board_svg: response.board_svg,
    })
}

/// /analyze レスポンスをパース
pub fn parse_analyze_response(status: u16, body: &str) -> Result<AnalysisResult> {
    let parsed = serde_json::from_str::<AnalyzeResponse>(body);

    if !is_success(status) {
        return Err(Error::service(parsed.ok().and_then(|r| r.error)));
    }

    let response = parsed.map_err(|e| Error::Network(format!("unreadable response: {}", e)))?;
    Ok(AnalysisResult::fen_only(response.fen.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_FAILURE_MESSAGE;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    // =============================================
    // /upload テスト
    // =============================================

    #[test]
    fn test_upload_success_full() {
        let body = r#"{
            "success": true,
            "fen": "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "board_svg": "<svg></svg>",
            "analysis_summary": "Equal position",
            "pgn": "[SetUp \"1\"]\n*",
            "variations": [
                {"score": 35, "mate_in": null, "pv": ["e4", "e5"]},
                {"score": null, "mate_in": 4, "pv": ["d4"]}
            ]
        }"#;

        let result = parse_upload_response(200, body).expect("パース失敗");
        assert_eq!(result.fen, START_FEN);
        assert_eq!(result.board_svg.as_deref(), Some("<svg></svg>"));
        assert_eq!(result.analysis_summary.as_deref(), Some("Equal position"));
        let variations = result.variations.expect("variationsがない");
        assert_eq!(variations.len(), 2);
        assert_eq!(variations[1].mate_in, Some(4));
    }

    #[test]
    fn test_upload_success_null_variations() {
        let body = r#"{"success": true, "fen": "8/8/8/8/8/8/8/8 w - - 0 1", "variations": null}"#;
        let result = parse_upload_response(200, body).expect("パース失敗");
        assert!(result.variations.is_none());
        assert!(result.pgn.is_none());
    }

    #[test]
    fn test_upload_application_failure() {
        let body = r#"{"success": false, "error": "no position found"}"#;
        let err = parse_upload_response(200, body).unwrap_err();
        assert!(matches!(&err, Error::Service(m) if m == "no position found"));
    }

    #[test]
    fn test_upload_failure_without_message() {
        let body = r#"{"success": false}"#;
        let err = parse_upload_response(200, body).unwrap_err();
        assert!(matches!(&err, Error::Service(m) if m == GENERIC_FAILURE_MESSAGE));
    }

    #[test]
    fn test_upload_error_status_with_json() {
        let body = r#"{"success": false, "error": "File too large"}"#;
        let err = parse_upload_response(413, body).unwrap_err();
        assert!(matches!(&err, Error::Service(m) if m == "File too large"));
    }

    #[test]
    fn test_upload_error_status_with_html() {
        let err = parse_upload_response(500, "<html>Internal Server Error</html>").unwrap_err();
        assert!(matches!(&err, Error::Service(m) if m == GENERIC_FAILURE_MESSAGE));
    }

    #[test]
    fn test_upload_unreadable_success_body() {
        let err = parse_upload_response(200, "not json").unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }

    // =============================================
    // /analyze テスト
    // =============================================

    #[test]
    fn test_analyze_success() {
        let body = format!(r#"{{"fen": "{}"}}"#, START_FEN);
        let result = parse_analyze_response(200, &body).expect("パース失敗");
        assert_eq!(result.fen, START_FEN);
        assert!(result.variations.is_none());
    }

    #[test]
    fn test_analyze_error_status() {
        let body = r#"{"error": "No image uploaded"}"#;
        let err = parse_analyze_response(400, body).unwrap_err();
        assert!(matches!(&err, Error::Service(m) if m == "No image uploaded"));
    }

    #[test]
    fn test_analyze_error_status_unreadable() {
        let err = parse_analyze_response(502, "").unwrap_err();
        assert!(matches!(&err, Error::Service(m) if m == GENERIC_FAILURE_MESSAGE));
    }

    #[test]
    fn test_parse_response_dispatch() {
        let body = r#"{"success": true, "fen": "k7/8/8/8/8/8/8/7K w - - 0 1"}"#;
        let result = parse_response(Endpoint::Upload, 200, body).expect("パース失敗");
        assert_eq!(result.fen, "k7/8/8/8/8/8/8/7K w - - 0 1");
    }
}
