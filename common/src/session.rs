//! ページセッションの状態
//!
//! 選択中のファイル、リクエスト状態、表示状態、描画済み結果を1か所で持つ。
//! 状態は遷移メソッド経由でのみ変更する。

use std::cell::RefCell;

use crate::error::Result;
use crate::render::RenderedResult;
use crate::types::{AnalysisResult, SelectedFile};

/// リクエスト状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// 表示状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub drop_zone_visible: bool,
    pub preview_visible: bool,
    pub preview_src: Option<String>,
    pub result_visible: bool,
    pub busy_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            drop_zone_visible: true,
            preview_visible: false,
            preview_src: None,
            result_visible: false,
            busy_visible: false,
        }
    }
}

/// ファイル読込のチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquisitionTicket(u64);

/// 送信中リクエストのチケット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    selection: u64,
    pub file: SelectedFile,
}

/// Sessionの置き場所
///
/// awaitをまたいで借用しないよう、更新はクロージャ単位で行う。
/// 置き場所が破棄済みならNone。
pub trait SessionStore {
    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R>;
}

impl SessionStore for RefCell<Session> {
    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    selected: Option<SelectedFile>,
    request_state: RequestState,
    view: ViewState,
    rendered: RenderedResult,
    acquisition_seq: u64,
    /// 選択が確定するたびに増える
    selection_seq: u64,
    request_seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn request_state(&self) -> RequestState {
        self.request_state
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn rendered(&self) -> &RenderedResult {
        &self.rendered
    }

    pub fn is_busy(&self) -> bool {
        self.request_state == RequestState::InFlight
    }

    /// 解析ボタンを押せるか
    pub fn can_analyze(&self) -> bool {
        self.selected.is_some() && !self.is_busy()
    }

    // =============================================
    // ファイル取得
    // =============================================

    /// 読込開始。以前のチケットは無効になる
    pub fn begin_acquisition(&mut self) -> AcquisitionTicket {
        self.acquisition_seq += 1;
        AcquisitionTicket(self.acquisition_seq)
    }

    /// 読込完了。新しい選択が始まっていればfalseを返して何もしない
    pub fn complete_acquisition(
        &mut self,
        ticket: AcquisitionTicket,
        file: SelectedFile,
        preview_src: String,
    ) -> bool {
        if ticket.0 != self.acquisition_seq {
            return false;
        }
        self.selected = Some(file);
        self.selection_seq += 1;
        self.view.preview_src = Some(preview_src);
        self.view.drop_zone_visible = false;
        self.view.preview_visible = true;
        self.view.result_visible = false;
        true
    }

    // =============================================
    // リクエスト
    // =============================================

    /// ファイル未選択または送信中ならNone
    pub fn begin_request(&mut self) -> Option<RequestTicket> {
        if self.is_busy() {
            return None;
        }
        let file = self.selected.clone()?;
        self.request_seq += 1;
        self.request_state = RequestState::InFlight;
        self.view.busy_visible = true;
        Some(RequestTicket {
            seq: self.request_seq,
            selection: self.selection_seq,
            file,
        })
    }

    /// 結果を反映し、最後に必ずビジー表示を消す
    ///
    /// 結果を表示したらOk(true)。送信中に別の画像が選ばれていた場合、
    /// その結果は捨ててOk(false)を返す。
    /// 失敗時は描画済みの結果に触れずにエラーを返す
    pub fn finish_request(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<AnalysisResult>,
    ) -> Result<bool> {
        debug_assert_eq!(ticket.seq, self.request_seq);
        let current = ticket.selection == self.selection_seq;

        let reported = match outcome {
            Ok(result) => {
                self.request_state = RequestState::Succeeded;
                if current {
                    self.rendered = RenderedResult::render(&result);
                    self.view.result_visible = true;
                }
                Ok(current)
            }
            Err(e) => {
                self.request_state = RequestState::Failed;
                Err(e)
            }
        };

        self.view.busy_visible = false;
        reported
    }
}
