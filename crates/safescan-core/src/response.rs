use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::label::{Category, Label};

/// Body returned by the classification service, exactly as sent.
#[derive(Clone, Debug, Deserialize)]
pub struct AnalysisResponse {
    pub predicted_class: String,
    pub confidence: f64,
    pub all_scores: HashMap<String, f64>,
}

/// Score for every label in the fixed set, each a fraction in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LabelScores {
    #[serde(rename = "Safe")]
    pub safe: f64,
    #[serde(rename = "NSFW Mild")]
    pub mild: f64,
    #[serde(rename = "NSFW Explicit")]
    pub explicit: f64,
}

impl LabelScores {
    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::Safe => self.safe,
            Label::NsfwMild => self.mild,
            Label::NsfwExplicit => self.explicit,
        }
    }

    /// Scores in the fixed display order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, f64)> + '_ {
        Label::ALL.iter().map(move |&label| (label, self.get(label)))
    }
}

/// Validated classification result for one selection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub category: Category,
    pub confidence: f64,
    pub scores: LabelScores,
}

impl AnalysisResult {
    /// Parse and validate a response body.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let response: AnalysisResponse = serde_json::from_slice(body)
            .map_err(|e| ScanError::MalformedResponse(e.to_string()))?;
        Self::try_from(response)
    }
}

impl TryFrom<AnalysisResponse> for AnalysisResult {
    type Error = ScanError;

    fn try_from(response: AnalysisResponse) -> Result<Self> {
        let confidence = check_fraction("confidence", response.confidence)?;

        let score = |label: Label| -> Result<f64> {
            let value = response.all_scores.get(label.as_str()).copied().ok_or_else(|| {
                ScanError::MalformedResponse(format!("missing score for \"{label}\""))
            })?;
            check_fraction(label.as_str(), value)
        };

        Ok(Self {
            category: Category::from_name(&response.predicted_class),
            confidence,
            scores: LabelScores {
                safe: score(Label::Safe)?,
                mild: score(Label::NsfwMild)?,
                explicit: score(Label::NsfwExplicit)?,
            },
        })
    }
}

fn check_fraction(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ScanError::MalformedResponse(format!(
            "\"{field}\" out of range: {value}"
        )))
    }
}
