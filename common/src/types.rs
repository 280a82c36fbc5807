//! 解析結果の型定義
//!
//! - SelectedFile: ユーザーが選んだ画像
//! - Variation: エンジンの読み筋（先頭が最善）
//! - AnalysisResult: サービスから受け取った局面データ

use serde::{Deserialize, Serialize};

/// 選択中の画像ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// 評価値（詰みとセンチポーンは排他）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// N手詰め
    MateIn(i32),
    /// センチポーン（正は手番側有利）
    Centipawns(f64),
}

/// 読み筋
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variation {
    pub score: Option<f64>,
    pub mate_in: Option<i32>,
    pub pv: Vec<String>,
}

impl Variation {
    /// mate_in があればそちらを優先し、scoreは無視する
    pub fn evaluation(&self) -> Evaluation {
        match self.mate_in {
            Some(n) => Evaluation::MateIn(n),
            None => Evaluation::Centipawns(self.score.unwrap_or(0.0)),
        }
    }

    pub fn moves(&self) -> String {
        self.pv.join(" ")
    }
}

/// 局面解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub fen: String,

    pub pgn: Option<String>,

    /// 人が読むための要約
    pub analysis_summary: Option<String>,

    pub variations: Option<Vec<Variation>>,

    /// 描画済み盤面（SVGマークアップ、そのまま挿入する）
    pub board_svg: Option<String>,
}

impl AnalysisResult {
    /// /analyze はFENのみを返す
    pub fn fen_only(fen: impl Into<String>) -> Self {
        Self {
            fen: fen.into(),
            ..Default::default()
        }
    }
}
