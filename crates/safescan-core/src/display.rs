//! Turns an [`AnalysisResult`] into the strings and bar widths shown to the
//! user. Shared by the GUI and the CLI so both render identically.

use crate::label::{Category, Label};
use crate::palette::{label_color, verdict_style, Rgb, VerdictStyle};
use crate::response::AnalysisResult;

/// Fraction as a percentage rounded to `decimals` places, ties away from
/// zero. `{:.N}` alone rounds exact ties to even (0.0625 -> "6.2").
fn rounded_percent(fraction: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (fraction * 100.0 * scale).round() / scale
}

/// `0.97` -> `"97.00% Confidence"`.
pub fn confidence_text(confidence: f64) -> String {
    format!("{:.2}% Confidence", rounded_percent(confidence, 2))
}

/// `0.02` -> `"2.0"` (percentage with one decimal, no sign).
pub fn percentage_digits(score: f64) -> String {
    format!("{:.1}", rounded_percent(score, 1))
}

/// One labelled score bar.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreBar {
    pub label: Label,
    /// Percentage text, e.g. `"97.0%"`.
    pub text: String,
    /// Bar width in percent, rounded to the same single decimal as `text`.
    pub width_percent: f32,
    pub color: Rgb,
}

impl ScoreBar {
    pub fn new(label: Label, score: f64) -> Self {
        let digits = percentage_digits(score);
        let width_percent = digits.parse::<f32>().unwrap_or(0.0);
        Self {
            label,
            text: format!("{digits}%"),
            width_percent,
            color: label_color(label),
        }
    }

    /// Width as a fraction of the full track, in [0, 1].
    pub fn width_fraction(&self) -> f32 {
        (self.width_percent / 100.0).clamp(0.0, 1.0)
    }
}

/// Everything the result area shows for one analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub category: Category,
    pub verdict: String,
    pub confidence_text: String,
    pub style: VerdictStyle,
    pub bars: Vec<ScoreBar>,
}

impl ResultView {
    pub fn new(result: &AnalysisResult) -> Self {
        Self {
            category: result.category.clone(),
            verdict: result.category.name().to_string(),
            confidence_text: confidence_text(result.confidence),
            style: verdict_style(&result.category),
            bars: result
                .scores
                .iter()
                .map(|(label, score)| ScoreBar::new(label, score))
                .collect(),
        }
    }

    pub fn bar(&self, label: Label) -> Option<&ScoreBar> {
        self.bars.iter().find(|b| b.label == label)
    }
}
