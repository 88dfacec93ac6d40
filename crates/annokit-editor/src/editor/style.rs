use annokit_core::{ParamKind, Rgb, ShapeKind, ShapeStyle, StyleParam};
use annokit_settings::style_defaults;

use super::ShapeEditor;
use crate::commands::EditCommand;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Color(Rgb),
}

/// One entry of a style panel. Opacities are whole percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Property {
    pub param: ParamKind,
    pub value: PropertyValue,
}

fn properties_of(style: &ShapeStyle) -> Vec<Property> {
    style
        .params()
        .into_iter()
        .map(|param| {
            let value = match param {
                StyleParam::Thickness(v) => PropertyValue::Number(v),
                StyleParam::StrokeColor(c) | StyleParam::FillColor(c) => PropertyValue::Color(c),
                StyleParam::StrokeOpacity(v) | StyleParam::FillOpacity(v) => {
                    PropertyValue::Number((v * 100.0).round())
                }
            };
            Property {
                param: param.kind(),
                value,
            }
        })
        .collect()
}

impl ShapeEditor {
    /// Builds the undoable command changing one style parameter. The
    /// command is not applied here; hand it to the undo manager.
    pub fn update_style(&self, param: StyleParam) -> EditCommand {
        let previous = self.style().get(param.kind());
        tracing::debug!(editor = %self.id, param = %param.kind(), "Style update requested");
        EditCommand::set_style(self.id, param, previous)
    }

    /// The editor's effective style as panel properties.
    pub fn properties(&self) -> Vec<Property> {
        properties_of(&self.style())
    }

    /// Panel properties a fresh editor of `kind` would start with.
    pub fn default_properties(kind: ShapeKind) -> Vec<Property> {
        properties_of(&style_defaults(kind))
    }
}
