mod common;

use approx::assert_relative_eq;

use safescan_core::display::{confidence_text, percentage_digits, ResultView, ScoreBar};
use safescan_core::label::{Category, Label};
use safescan_core::palette::{
    label_color, verdict_style, EXPLICIT_COLOR, MILD_COLOR, NEUTRAL_COLOR, NEUTRAL_STYLE,
    SAFE_COLOR,
};
use safescan_core::response::AnalysisResult;

use common::safe_result;

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

#[test]
fn test_confidence_text_two_decimals() {
    assert_eq!(confidence_text(0.97), "97.00% Confidence");
    assert_eq!(confidence_text(1.0), "100.00% Confidence");
    assert_eq!(confidence_text(0.0), "0.00% Confidence");
}

#[test]
fn test_percentage_one_decimal() {
    assert_eq!(percentage_digits(0.02), "2.0");
    assert_eq!(percentage_digits(0.5), "50.0");
    assert_eq!(percentage_digits(0.0001), "0.0");
}

#[test]
fn test_exact_ties_round_up() {
    assert_eq!(percentage_digits(0.0625), "6.3");
    assert_eq!(percentage_digits(0.3125), "31.3");
    assert_eq!(confidence_text(0.03125), "3.13% Confidence");

    let bar = ScoreBar::new(Label::Safe, 0.0625);
    assert_eq!(bar.text, "6.3%");
    assert_relative_eq!(bar.width_percent, 6.3);
}

#[test]
fn test_score_bar_width_matches_text() {
    let bar = ScoreBar::new(Label::NsfwMild, 0.4567);
    assert_eq!(bar.text, "45.7%");
    assert_relative_eq!(bar.width_percent, 45.7);
    assert_relative_eq!(bar.width_fraction(), 0.457, epsilon = 1e-6);
    assert_eq!(bar.color, MILD_COLOR);
}

// ---------------------------------------------------------------------------
// Result view
// ---------------------------------------------------------------------------

#[test]
fn test_safe_example_renders() {
    let view = ResultView::new(&safe_result());

    assert_eq!(view.verdict, "Safe");
    assert_eq!(view.category.label(), Some(Label::Safe));
    assert_eq!(view.confidence_text, "97.00% Confidence");
    assert_eq!(view.bar(Label::Safe).unwrap().text, "97.0%");
    assert_eq!(view.bar(Label::NsfwMild).unwrap().text, "2.0%");
    assert_eq!(view.bar(Label::NsfwExplicit).unwrap().text, "1.0%");
    assert_relative_eq!(view.bar(Label::Safe).unwrap().width_percent, 97.0);
    assert_relative_eq!(view.bar(Label::NsfwMild).unwrap().width_percent, 2.0);
    assert_relative_eq!(view.bar(Label::NsfwExplicit).unwrap().width_percent, 1.0);
    assert_eq!(view.style.border, SAFE_COLOR);
}

#[test]
fn test_view_has_one_bar_per_label() {
    let view = ResultView::new(&safe_result());
    let labels: Vec<Label> = view.bars.iter().map(|b| b.label).collect();
    assert_eq!(labels, Label::ALL.to_vec());
}

#[test]
fn test_unknown_category_renders_with_neutral_style() {
    let result = AnalysisResult::from_json(
        br#"{"predicted_class": "Unknown", "confidence": 0.4,
             "all_scores": {"Safe": 0.3, "NSFW Mild": 0.3, "NSFW Explicit": 0.4}}"#,
    )
    .unwrap();
    let view = ResultView::new(&result);

    assert_eq!(view.verdict, "Unknown");
    assert_eq!(view.category.label(), None);
    assert_eq!(view.confidence_text, "40.00% Confidence");
    assert_eq!(view.style, NEUTRAL_STYLE);
    assert_eq!(view.bars.len(), 3);
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

#[test]
fn test_explicit_category_uses_explicit_color() {
    let style = verdict_style(&Category::from_name("NSFW Explicit"));
    assert_eq!(style.border, EXPLICIT_COLOR);
    assert_eq!(style.gradient.0, EXPLICIT_COLOR);
}

#[test]
fn test_mild_category_uses_mild_color() {
    assert_eq!(verdict_style(&Category::from_name("NSFW Mild")).border, MILD_COLOR);
}

#[test]
fn test_unrecognized_category_falls_back_to_neutral() {
    for name in ["Unknown", "", "safe", "NSFW"] {
        let style = verdict_style(&Category::from_name(name));
        assert_eq!(style.border, NEUTRAL_COLOR, "category {name:?}");
    }
}

#[test]
fn test_label_colors_are_distinct() {
    assert_ne!(label_color(Label::Safe), label_color(Label::NsfwMild));
    assert_ne!(label_color(Label::NsfwMild), label_color(Label::NsfwExplicit));
    assert_eq!(EXPLICIT_COLOR.to_hex(), "#ef4444");
}
