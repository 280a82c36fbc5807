//! 解析結果の表示モデル
//!
//! AnalysisResultを画面に出す文字列へ変換する。
//! renderは毎回全体を置き換える（前回の内容は残らない）。

use crate::types::{AnalysisResult, Evaluation, Variation};

/// スコアバッジの色分け
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeSeverity {
    Mate,
    Advantage,
    Neutral,
}

impl BadgeSeverity {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeSeverity::Mate => "badge bg-danger",
            BadgeSeverity::Advantage => "badge bg-success",
            BadgeSeverity::Neutral => "badge bg-secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBadge {
    pub text: String,
    pub severity: BadgeSeverity,
}

impl ScoreBadge {
    pub fn for_evaluation(evaluation: Evaluation) -> Self {
        match evaluation {
            Evaluation::MateIn(n) => Self {
                text: format!("Mate in {}", n),
                severity: BadgeSeverity::Mate,
            },
            Evaluation::Centipawns(cp) => Self {
                text: format!("{:.2}", cp / 100.0),
                severity: if cp > 0.0 {
                    BadgeSeverity::Advantage
                } else {
                    BadgeSeverity::Neutral
                },
            },
        }
    }
}

/// 読み筋1件分
#[derive(Debug, Clone, PartialEq)]
pub struct VariationView {
    pub label: String,
    pub badge: ScoreBadge,
    pub moves: String,
}

impl VariationView {
    /// `index` は0始まり、ラベルは1始まり
    pub fn new(index: usize, variation: &Variation) -> Self {
        Self {
            label: format!("Variant {}", index + 1),
            badge: ScoreBadge::for_evaluation(variation.evaluation()),
            moves: variation.moves(),
        }
    }
}

/// 結果パネルに表示する内容
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedResult {
    pub fen: String,
    pub board_svg: Option<String>,
    pub summary: String,
    pub pgn: String,
    pub variations: Vec<VariationView>,
}

impl RenderedResult {
    pub fn render(result: &AnalysisResult) -> Self {
        Self {
            fen: result.fen.clone(),
            board_svg: result.board_svg.clone(),
            summary: result.analysis_summary.clone().unwrap_or_default(),
            pgn: result.pgn.clone().unwrap_or_default(),
            variations: result
                .variations
                .as_deref()
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(|(i, v)| VariationView::new(i, v))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variation(score: Option<f64>, mate_in: Option<i32>, pv: &[&str]) -> Variation {
        Variation {
            score,
            mate_in,
            pv: pv.iter().map(|m| m.to_string()).collect(),
        }
    }

    // =============================================
    // ScoreBadge テスト
    // =============================================

    #[test]
    fn test_mate_badge_ignores_score() {
        let view = VariationView::new(0, &variation(Some(150.0), Some(3), &["Qh7+"]));
        assert_eq!(view.badge.text, "Mate in 3");
        assert_eq!(view.badge.severity, BadgeSeverity::Mate);
    }

    #[test]
    fn test_positive_score_badge() {
        let view = VariationView::new(0, &variation(Some(150.0), None, &["e4"]));
        assert_eq!(view.badge.text, "1.50");
        assert_eq!(view.badge.severity, BadgeSeverity::Advantage);
        assert_eq!(view.badge.severity.css_class(), "badge bg-success");
    }

    #[test]
    fn test_negative_and_zero_score_badge() {
        let negative = ScoreBadge::for_evaluation(Evaluation::Centipawns(-42.0));
        assert_eq!(negative.text, "-0.42");
        assert_eq!(negative.severity, BadgeSeverity::Neutral);

        let zero = ScoreBadge::for_evaluation(Evaluation::Centipawns(0.0));
        assert_eq!(zero.text, "0.00");
        assert_eq!(zero.severity, BadgeSeverity::Neutral);
    }

    // =============================================
    // render テスト
    // =============================================

    #[test]
    fn test_render_variations_in_order() {
        let result = AnalysisResult {
            fen: "fen".to_string(),
            variations: Some(vec![
                variation(Some(80.0), None, &["e4", "e5"]),
                variation(Some(20.0), None, &["d4"]),
                variation(None, Some(5), &["Nf3", "Nc6"]),
            ]),
            ..Default::default()
        };

        let rendered = RenderedResult::render(&result);
        let labels: Vec<&str> = rendered.variations.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["Variant 1", "Variant 2", "Variant 3"]);
        assert_eq!(rendered.variations[0].moves, "e4 e5");
        assert_eq!(rendered.variations[2].badge.text, "Mate in 5");
    }

    #[test]
    fn test_render_replaces_previous_content() {
        let first = RenderedResult::render(&AnalysisResult {
            fen: "first".to_string(),
            pgn: Some("1. e4".to_string()),
            analysis_summary: Some("White is better".to_string()),
            board_svg: Some("<svg/>".to_string()),
            variations: Some(vec![variation(Some(10.0), None, &["e4"]); 3]),
        });
        assert_eq!(first.variations.len(), 3);

        let second = RenderedResult::render(&AnalysisResult {
            fen: "second".to_string(),
            variations: Some(vec![variation(Some(10.0), None, &["d4"])]),
            ..Default::default()
        });
        assert_eq!(second.fen, "second");
        assert_eq!(second.variations.len(), 1);
        assert_eq!(second.pgn, "");
        assert_eq!(second.summary, "");
        assert!(second.board_svg.is_none());
    }

    #[test]
    fn test_render_missing_fields() {
        let rendered = RenderedResult::render(&AnalysisResult::default());
        assert!(rendered.is_empty());
    }
}
