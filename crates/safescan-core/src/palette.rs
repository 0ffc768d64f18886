//! Verdict colours. The mapping is a pure function of the category, with a
//! neutral fallback for anything outside the fixed label set.

use crate::label::{Category, Label};

/// 8-bit sRGB colour, independent of any UI toolkit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const SAFE_COLOR: Rgb = Rgb::new(0x10, 0xb9, 0x81);
pub const SAFE_COLOR_LIGHT: Rgb = Rgb::new(0x34, 0xd3, 0x99);
pub const MILD_COLOR: Rgb = Rgb::new(0xf5, 0x9e, 0x0b);
pub const MILD_COLOR_LIGHT: Rgb = Rgb::new(0xfb, 0xbf, 0x24);
pub const EXPLICIT_COLOR: Rgb = Rgb::new(0xef, 0x44, 0x44);
pub const EXPLICIT_COLOR_LIGHT: Rgb = Rgb::new(0xf8, 0x71, 0x71);
pub const NEUTRAL_COLOR: Rgb = Rgb::new(0x94, 0xa3, 0xb8);
pub const NEUTRAL_GRADIENT_START: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const NEUTRAL_GRADIENT_END: Rgb = Rgb::new(0xcb, 0xd5, 0xe1);

/// Visual treatment of the verdict card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerdictStyle {
    /// Card border colour.
    pub border: Rgb,
    /// Start and end colour of the verdict text gradient.
    pub gradient: (Rgb, Rgb),
}

pub const NEUTRAL_STYLE: VerdictStyle = VerdictStyle {
    border: NEUTRAL_COLOR,
    gradient: (NEUTRAL_GRADIENT_START, NEUTRAL_GRADIENT_END),
};

/// Base colour of a label, also used for its score bar.
pub fn label_color(label: Label) -> Rgb {
    match label {
        Label::Safe => SAFE_COLOR,
        Label::NsfwMild => MILD_COLOR,
        Label::NsfwExplicit => EXPLICIT_COLOR,
    }
}

pub fn verdict_style(category: &Category) -> VerdictStyle {
    match category.label() {
        Some(Label::Safe) => VerdictStyle {
            border: SAFE_COLOR,
            gradient: (SAFE_COLOR, SAFE_COLOR_LIGHT),
        },
        Some(Label::NsfwMild) => VerdictStyle {
            border: MILD_COLOR,
            gradient: (MILD_COLOR, MILD_COLOR_LIGHT),
        },
        Some(Label::NsfwExplicit) => VerdictStyle {
            border: EXPLICIT_COLOR,
            gradient: (EXPLICIT_COLOR, EXPLICIT_COLOR_LIGHT),
        },
        None => NEUTRAL_STYLE,
    }
}
