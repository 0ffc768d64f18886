use approx::assert_relative_eq;

use safescan_core::error::ScanError;
use safescan_core::label::{Category, Label};
use safescan_core::response::AnalysisResult;

fn parse(body: &str) -> Result<AnalysisResult, ScanError> {
    AnalysisResult::from_json(body.as_bytes())
}

fn assert_malformed(body: &str) {
    match parse(body) {
        Err(ScanError::MalformedResponse(_)) => {}
        other => panic!("expected MalformedResponse for {body}, got {other:?}"),
    }
}

#[test]
fn test_parse_complete_response() {
    let result = parse(
        r#"{"predicted_class": "NSFW Mild", "confidence": 0.6,
            "all_scores": {"Safe": 0.3, "NSFW Mild": 0.6, "NSFW Explicit": 0.1}}"#,
    )
    .unwrap();

    assert_eq!(result.category, Category::Known(Label::NsfwMild));
    assert_relative_eq!(result.confidence, 0.6);
    assert_relative_eq!(result.scores.get(Label::Safe), 0.3);
    assert_relative_eq!(result.scores.get(Label::NsfwMild), 0.6);
    assert_relative_eq!(result.scores.get(Label::NsfwExplicit), 0.1);
}

#[test]
fn test_scores_iterate_in_display_order() {
    let result = parse(
        r#"{"predicted_class": "Safe", "confidence": 0.9,
            "all_scores": {"NSFW Explicit": 0.03, "Safe": 0.9, "NSFW Mild": 0.07}}"#,
    )
    .unwrap();
    let labels: Vec<Label> = result.scores.iter().map(|(l, _)| l).collect();
    assert_eq!(labels, vec![Label::Safe, Label::NsfwMild, Label::NsfwExplicit]);
}

#[test]
fn test_unrecognized_category_is_kept() {
    let result = parse(
        r#"{"predicted_class": "Unknown", "confidence": 0.5,
            "all_scores": {"Safe": 0.5, "NSFW Mild": 0.25, "NSFW Explicit": 0.25}}"#,
    )
    .unwrap();
    assert_eq!(result.category, Category::Unrecognized("Unknown".into()));
    assert_eq!(result.category.name(), "Unknown");
    assert!(result.category.label().is_none());
}

#[test]
fn test_extra_scores_are_ignored() {
    let result = parse(
        r#"{"predicted_class": "Safe", "confidence": 1.0,
            "all_scores": {"Safe": 1.0, "NSFW Mild": 0.0, "NSFW Explicit": 0.0, "Drawing": 0.4}}"#,
    );
    assert!(result.is_ok());
}

#[test]
fn test_missing_fields_are_malformed() {
    assert_malformed(r#"{"confidence": 0.9, "all_scores": {"Safe": 0.9, "NSFW Mild": 0.05, "NSFW Explicit": 0.05}}"#);
    assert_malformed(r#"{"predicted_class": "Safe", "all_scores": {"Safe": 0.9, "NSFW Mild": 0.05, "NSFW Explicit": 0.05}}"#);
    assert_malformed(r#"{"predicted_class": "Safe", "confidence": 0.9}"#);
}

#[test]
fn test_missing_label_score_is_malformed() {
    assert_malformed(
        r#"{"predicted_class": "Safe", "confidence": 0.9, "all_scores": {"Safe": 0.9, "NSFW Mild": 0.1}}"#,
    );
}

#[test]
fn test_wrong_types_are_malformed() {
    assert_malformed(r#"{"predicted_class": 3, "confidence": 0.9, "all_scores": {}}"#);
    assert_malformed(
        r#"{"predicted_class": "Safe", "confidence": "high",
            "all_scores": {"Safe": 0.9, "NSFW Mild": 0.05, "NSFW Explicit": 0.05}}"#,
    );
}

#[test]
fn test_out_of_range_values_are_malformed() {
    assert_malformed(
        r#"{"predicted_class": "Safe", "confidence": 1.5,
            "all_scores": {"Safe": 0.9, "NSFW Mild": 0.05, "NSFW Explicit": 0.05}}"#,
    );
    assert_malformed(
        r#"{"predicted_class": "Safe", "confidence": 0.9,
            "all_scores": {"Safe": 0.9, "NSFW Mild": -0.05, "NSFW Explicit": 0.05}}"#,
    );
}

#[test]
fn test_non_json_body_is_malformed() {
    assert_malformed("<html>Service Unavailable</html>");
    assert_malformed("");
}

#[test]
fn test_result_serializes_with_service_names() {
    let result = parse(
        r#"{"predicted_class": "NSFW Explicit", "confidence": 0.8,
            "all_scores": {"Safe": 0.1, "NSFW Mild": 0.1, "NSFW Explicit": 0.8}}"#,
    )
    .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["category"], "NSFW Explicit");
    assert_eq!(json["scores"]["NSFW Explicit"], 0.8);
}
