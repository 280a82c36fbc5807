//! Leptosシグナル上のSession

use chess_photo_common::{Session, SessionStore};
use leptos::prelude::*;

/// ページ全体で1つだけ作る
#[derive(Clone, Copy)]
pub struct SessionHandle(RwSignal<Session>);

impl SessionHandle {
    pub fn new() -> Self {
        Self(RwSignal::new(Session::new()))
    }

    /// 表示用（リアクティブに追跡される）
    pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.0.with(f)
    }

    /// イベントハンドラ用（追跡しない）
    pub fn peek<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.0.with_untracked(f)
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for SessionHandle {
    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_photo_common::{AnalysisResult, SelectedFile};

    #[test]
    fn test_handle_transitions() {
        let handle = SessionHandle::new();
        let ticket = handle.update(Session::begin_acquisition).expect("シグナル破棄済み");
        let accepted = handle
            .update(|s| {
                s.complete_acquisition(
                    ticket,
                    SelectedFile::new("a.png", "image/png", vec![1]),
                    "data:image/png;base64,AQ==".into(),
                )
            })
            .expect("シグナル破棄済み");
        assert!(accepted);
        assert!(handle.peek(Session::can_analyze));

        let request = handle
            .update(Session::begin_request)
            .flatten()
            .expect("送信開始失敗");
        assert!(handle.peek(|s| s.view().busy_visible));

        handle
            .update(|s| s.finish_request(request, Ok(AnalysisResult::fen_only("fen"))))
            .expect("シグナル破棄済み")
            .expect("反映失敗");
        assert_eq!(handle.peek(|s| s.rendered().fen.clone()), "fen");
        assert!(!handle.peek(|s| s.view().busy_visible));
    }
}
