use std::fmt;

use serde::{Serialize, Serializer};

/// One of the fixed labels the classification service scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Safe,
    NsfwMild,
    NsfwExplicit,
}

impl Label {
    pub const ALL: &[Self] = &[Self::Safe, Self::NsfwMild, Self::NsfwExplicit];

    /// Name used by the service in `predicted_class` and `all_scores`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::NsfwMild => "NSFW Mild",
            Self::NsfwExplicit => "NSFW Explicit",
        }
    }

    /// Short caption shown next to a score bar.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::NsfwMild => "Mild",
            Self::NsfwExplicit => "Explicit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == name)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicted category. Names outside the fixed label set are kept verbatim
/// so they can still be displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Category {
    Known(Label),
    Unrecognized(String),
}

impl Category {
    pub fn from_name(name: &str) -> Self {
        match Label::from_name(name) {
            Some(label) => Self::Known(label),
            None => Self::Unrecognized(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Known(label) => label.as_str(),
            Self::Unrecognized(name) => name,
        }
    }

    pub fn label(&self) -> Option<Label> {
        match self {
            Self::Known(label) => Some(*label),
            Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
