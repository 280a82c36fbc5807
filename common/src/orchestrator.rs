//! 解析リクエストの実行
//!
//! begin_request -> Transport送信 -> finish_request の順に進める。
//! 失敗はすべて値として finish_request に渡るので、ビジー表示は必ず消える。

use crate::config::{ClientConfig, Endpoint};
use crate::error::Result;
use crate::parser::parse_response;
use crate::session::{Session, SessionStore};
use crate::types::{AnalysisResult, SelectedFile};

/// HTTPレスポンス（ステータスと本文）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// multipartのファイルパート
#[derive(Debug, Clone, Copy)]
pub struct FilePart<'a> {
    pub field_name: &'static str,
    pub file: &'a SelectedFile,
}

/// HTTP送信の抽象（ブラウザではfetch）
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// ファイルを1つだけ含むmultipartをPOSTする
    ///
    /// 送信できない・本文を読めない場合は `Error::Network`
    async fn post_multipart(&self, url: &str, part: FilePart<'_>) -> Result<HttpReply>;
}

/// 解析の実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Rendered,
    /// ファイル未選択、または送信中
    Skipped,
    /// 送信中に別の画像が選ばれたため結果を捨てた
    Superseded,
}

/// ファイルを送信してAnalysisResultを受け取る
pub async fn submit_for_analysis<T: Transport>(
    transport: &T,
    config: &ClientConfig,
    file: &SelectedFile,
) -> Result<AnalysisResult> {
    let endpoint: Endpoint = config.endpoint;
    let part = FilePart {
        field_name: endpoint.field_name(),
        file,
    };

    let reply = transport.post_multipart(&config.endpoint_url(), part).await?;
    parse_response(endpoint, reply.status, &reply.body)
}

/// 解析の全工程（状態遷移込み）
///
/// 返すErrはアラート表示の対象。描画済みの結果は変更されない。
pub async fn analyze<S: SessionStore, T: Transport>(
    store: &S,
    transport: &T,
    config: &ClientConfig,
) -> Result<AnalysisOutcome> {
    let Some(ticket) = store.update(Session::begin_request).flatten() else {
        return Ok(AnalysisOutcome::Skipped);
    };

    let outcome = submit_for_analysis(transport, config, &ticket.file).await;

    match store.update(move |s| s.finish_request(ticket, outcome)) {
        Some(Ok(true)) => Ok(AnalysisOutcome::Rendered),
        Some(Ok(false)) => Ok(AnalysisOutcome::Superseded),
        Some(Err(e)) => Err(e),
        None => Ok(AnalysisOutcome::Skipped),
    }
}
