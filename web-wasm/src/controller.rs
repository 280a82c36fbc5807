//! UIイベント -> Session の橋渡し
//!
//! ドロップ・ファイル選択・フォーム送信はすべてここを通る。
//! エラーはここでconsoleに出し、必要ならアラート表示する。

use chess_photo_common::{
    analyze, begin_file_acquisition, complete_file_acquisition, Acquisition, AnalysisOutcome,
    ClientConfig, Error, SelectedFile, Session,
};
use gloo::console;
use gloo::file::futures::read_as_bytes;
use leptos::task::spawn_local;

use crate::api::fetch::FetchTransport;
use crate::session_handle::SessionHandle;

/// エラーをconsoleに出し、表示対象ならアラートを出す
pub fn report(error: &Error) {
    console::error!(error.to_string());
    if error.is_surfaced() {
        gloo::dialogs::alert(&error.user_message());
    }
}

/// ドロップ・ファイル選択の共通処理
///
/// 画像以外は何もしない。読込完了後にだけプレビューを差し替える。
pub fn acquire_file(session: SessionHandle, config: &ClientConfig, file: web_sys::File) {
    let name = file.name();
    let mime_type = file.type_();

    let size = file.size() as u64;
    let ticket = match begin_file_acquisition(&session, &mime_type, size, config.max_upload_bytes) {
        Acquisition::Started(ticket) => ticket,
        Acquisition::Ignored => {
            console::log!(format!("ignored file: {} ({})", name, mime_type));
            return;
        }
        Acquisition::Rejected(e) => {
            report(&e);
            return;
        }
    };

    spawn_local(async move {
        let blob = gloo::file::File::from(file);
        match read_as_bytes(&blob).await {
            Ok(bytes) => {
                let selected = SelectedFile::new(name, mime_type, bytes);
                if !complete_file_acquisition(&session, ticket, selected) {
                    console::log!("discarded stale file read");
                }
            }
            Err(e) => report(&Error::Validation(format!("Could not read {}: {}", name, e))),
        }
    });
}

/// 解析開始。ファイル未選択・送信中なら何もしない
pub fn start_analysis(session: SessionHandle, config: ClientConfig) {
    if !session.peek(Session::can_analyze) {
        return;
    }

    spawn_local(async move {
        let transport = FetchTransport::new(config.request_timeout_ms);
        match analyze(&session, &transport, &config).await {
            Ok(AnalysisOutcome::Rendered) => console::log!("analysis rendered"),
            Ok(AnalysisOutcome::Superseded) => console::log!("discarded result for replaced image"),
            Ok(AnalysisOutcome::Skipped) => {}
            Err(e) => report(&e),
        }
    });
}
