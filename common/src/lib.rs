//! Chess Photo Common Library
//!
//! ブラウザ側UIから独立した型と処理:
//! ファイル取得・解析リクエスト・結果表示モデル・コピー/ダウンロード

pub mod acquisition;
pub mod config;
pub mod error;
pub mod export;
pub mod orchestrator;
pub mod parser;
pub mod render;
pub mod session;
pub mod types;

pub use acquisition::{
    begin_file_acquisition, complete_file_acquisition, data_url, is_image_mime, screen,
    Acquisition, Screening,
};
pub use config::{ClientConfig, Endpoint, Surface};
pub use error::{Error, Result, GENERIC_FAILURE_MESSAGE};
pub use export::{download_filename, CopyFeedback, RestoreTicket, TextDownload};
pub use orchestrator::{
    analyze, submit_for_analysis, AnalysisOutcome, FilePart, HttpReply, Transport,
};
pub use parser::{parse_analyze_response, parse_response, parse_upload_response};
pub use render::{BadgeSeverity, RenderedResult, ScoreBadge, VariationView};
pub use session::{AcquisitionTicket, RequestState, RequestTicket, Session, SessionStore, ViewState};
pub use types::{AnalysisResult, Evaluation, SelectedFile, Variation};
