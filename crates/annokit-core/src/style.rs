//! Stroke and fill style shared by all shapes of one editor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Rgb;
use crate::constants::{
    DEFAULT_FILL_OPACITY, DEFAULT_STROKE_OPACITY, DEFAULT_THICKNESS,
};

/// Rendering attributes of an editor. These are never scaled with geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub stroke_color: Rgb,
    /// In `[0, 1]`.
    pub stroke_opacity: f64,
    /// Stroke thickness in page units.
    pub thickness: f64,
    pub fill_color: Rgb,
    /// In `[0, 1]`.
    pub fill_opacity: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Rgb::BLACK,
            stroke_opacity: DEFAULT_STROKE_OPACITY,
            thickness: DEFAULT_THICKNESS,
            fill_color: Rgb::WHITE,
            fill_opacity: DEFAULT_FILL_OPACITY,
        }
    }
}

impl ShapeStyle {
    /// Returns the current value of one parameter.
    pub fn get(&self, kind: ParamKind) -> StyleParam {
        match kind {
            ParamKind::Thickness => StyleParam::Thickness(self.thickness),
            ParamKind::StrokeColor => StyleParam::StrokeColor(self.stroke_color),
            ParamKind::StrokeOpacity => StyleParam::StrokeOpacity(self.stroke_opacity),
            ParamKind::FillColor => StyleParam::FillColor(self.fill_color),
            ParamKind::FillOpacity => StyleParam::FillOpacity(self.fill_opacity),
        }
    }

    /// Overwrites one parameter.
    pub fn apply(&mut self, param: StyleParam) {
        match param {
            StyleParam::Thickness(v) => self.thickness = v,
            StyleParam::StrokeColor(c) => self.stroke_color = c,
            StyleParam::StrokeOpacity(v) => self.stroke_opacity = v,
            StyleParam::FillColor(c) => self.fill_color = c,
            StyleParam::FillOpacity(v) => self.fill_opacity = v,
        }
    }

    /// Returns a copy with `param` applied.
    pub fn with(mut self, param: StyleParam) -> Self {
        self.apply(param);
        self
    }

    /// All parameters in a stable order.
    pub fn params(&self) -> [StyleParam; 5] {
        ParamKind::ALL.map(|kind| self.get(kind))
    }
}

/// Identifies one style parameter. Also used as the undo merge key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Thickness,
    StrokeColor,
    StrokeOpacity,
    FillColor,
    FillOpacity,
}

impl ParamKind {
    pub const ALL: [ParamKind; 5] = [
        ParamKind::Thickness,
        ParamKind::StrokeColor,
        ParamKind::StrokeOpacity,
        ParamKind::FillColor,
        ParamKind::FillOpacity,
    ];

    /// Whether changing this parameter changes the content extent.
    pub fn affects_geometry(&self) -> bool {
        matches!(self, Self::Thickness)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Thickness => "thickness",
            Self::StrokeColor => "stroke_color",
            Self::StrokeOpacity => "stroke_opacity",
            Self::FillColor => "fill_color",
            Self::FillOpacity => "fill_opacity",
        };
        f.write_str(name)
    }
}

/// A single style parameter together with its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "param", content = "value", rename_all = "snake_case")]
pub enum StyleParam {
    Thickness(f64),
    StrokeColor(Rgb),
    StrokeOpacity(f64),
    FillColor(Rgb),
    FillOpacity(f64),
}

impl StyleParam {
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Thickness(_) => ParamKind::Thickness,
            Self::StrokeColor(_) => ParamKind::StrokeColor,
            Self::StrokeOpacity(_) => ParamKind::StrokeOpacity,
            Self::FillColor(_) => ParamKind::FillColor,
            Self::FillOpacity(_) => ParamKind::FillOpacity,
        }
    }

    /// Builds an opacity parameter from a UI percentage (0–100).
    ///
    /// Returns `None` for the non-opacity kinds.
    pub fn from_percent_opacity(kind: ParamKind, percent: f64) -> Option<Self> {
        let value = (percent / 100.0).clamp(0.0, 1.0);
        match kind {
            ParamKind::StrokeOpacity => Some(Self::StrokeOpacity(value)),
            ParamKind::FillOpacity => Some(Self::FillOpacity(value)),
            _ => None,
        }
    }
}
