//! ファイル取得
//!
//! ドロップとファイル選択の両方がここを通る。
//! `image/` 以外は黙って無視し、サイズ超過はエラーとして表示する。

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::Error;
use crate::session::{AcquisitionTicket, Session, SessionStore};
use crate::types::SelectedFile;

/// 読込前の判定結果
#[derive(Debug)]
pub enum Screening {
    Accept,
    /// 画像以外（何もしない）
    Ignore,
    Reject(Error),
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// MIMEタイプとサイズでファイルを判定
pub fn screen(mime_type: &str, size: u64, max_bytes: u64) -> Screening {
    if !is_image_mime(mime_type) {
        return Screening::Ignore;
    }
    if size > max_bytes {
        return Screening::Reject(Error::Validation(format!(
            "Image is too large ({:.1} MB, limit {:.0} MB)",
            size as f64 / (1024.0 * 1024.0),
            max_bytes as f64 / (1024.0 * 1024.0),
        )));
    }
    Screening::Accept
}

/// プレビュー用Data URLを作る
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// 取得開始の結果
#[derive(Debug)]
pub enum Acquisition {
    /// 読込を始めてよい
    Started(AcquisitionTicket),
    /// 画像以外、またはSessionが破棄済み
    Ignored,
    Rejected(Error),
}

/// ドロップ・ファイル選択の入口
///
/// 判定を通った場合だけチケットを発行する。
/// 無視・拒否したファイルは読込中の別ファイルに影響しない。
pub fn begin_file_acquisition<S: SessionStore>(
    store: &S,
    mime_type: &str,
    size: u64,
    max_bytes: u64,
) -> Acquisition {
    match screen(mime_type, size, max_bytes) {
        Screening::Accept => match store.update(Session::begin_acquisition) {
            Some(ticket) => Acquisition::Started(ticket),
            None => Acquisition::Ignored,
        },
        Screening::Ignore => Acquisition::Ignored,
        Screening::Reject(e) => Acquisition::Rejected(e),
    }
}

/// 読込完了後にプレビューを作って選択を確定する
///
/// 古いチケットならfalse
pub fn complete_file_acquisition<S: SessionStore>(
    store: &S,
    ticket: AcquisitionTicket,
    file: SelectedFile,
) -> bool {
    let preview = data_url(&file.mime_type, &file.bytes);
    store
        .update(move |s| s.complete_acquisition(ticket, file, preview))
        .unwrap_or(false)
}
