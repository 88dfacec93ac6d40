//! Keeping the surface wrapped around the content.

use annokit_core::Point;

use super::{ShapeEditor, SurfaceSize};
use crate::events::EditorEvent;
use crate::model::{bounding_box, ShapeRecord};

/// Padding in pixels reserved around the content for the stroke.
pub fn padding_for(thickness: f64, page_scale: f64, locked: bool) -> f64 {
    if locked {
        (thickness * page_scale).ceil()
    } else {
        0.0
    }
}

/// Inputs of a fit besides the shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitInput {
    pub thickness: f64,
    pub page_scale: f64,
    pub scale_factor: f64,
    pub locked: bool,
    pub min_size: f64,
}

/// Result of fitting the surface to the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Surface size in whole pixels.
    pub width: f64,
    pub height: f64,
    /// Content extent in local units, at least the minimum size.
    pub base_width: f64,
    pub base_height: f64,
    pub translation: Point,
    pub scale_factor: f64,
    pub padding: f64,
}

/// Computes the surface that tightly wraps `shapes`. The box is taken
/// without stroke; the padding reserves room for it. `None` when there are
/// no shapes.
pub fn compute_fit(shapes: &[ShapeRecord], input: &FitInput) -> Option<Fit> {
    let bbox = bounding_box(shapes, 0.0)?;
    let padding = padding_for(input.thickness, input.page_scale, input.locked);
    let base_width = input.min_size.max(bbox.width());
    let base_height = input.min_size.max(bbox.height());

    Some(Fit {
        width: (padding + base_width * input.scale_factor).ceil(),
        height: (padding + base_height * input.scale_factor).ceil(),
        base_width,
        base_height,
        translation: Point::new(-bbox.min_x, -bbox.min_y),
        scale_factor: input.scale_factor,
        padding,
    })
}

impl ShapeEditor {
    fn fit_input(&self) -> FitInput {
        FitInput {
            thickness: self.style().thickness,
            page_scale: self.page.scale,
            scale_factor: self.state.scale_factor,
            locked: self.state.is_locked,
            min_size: self.min_size,
        }
    }

    /// Resizes and moves the surface so it wraps the shapes. Unlocked editors
    /// keep their surface and only redraw. `first_time` also shifts the
    /// editor by half the padding, which was not reserved while drawing.
    pub fn fit_to_content(&mut self, first_time: bool) -> Vec<EditorEvent> {
        if self.is_empty() {
            return Vec::new();
        }
        if !self.state.is_locked {
            return vec![EditorEvent::RequestRedraw];
        }
        let Some(fit) = compute_fit(&self.state.shapes, &self.fit_input()) else {
            return Vec::new();
        };

        let previous = self.state.translation;
        self.state.translation = fit.translation;
        self.base_size = (fit.base_width, fit.base_height);
        self.surface = SurfaceSize::new(fit.width, fit.height);
        self.real_size = Some(self.surface.rounded());

        let unscaled_padding = if first_time { fit.padding / 2.0 } else { 0.0 };
        let sf = self.state.scale_factor;
        let dx = ((previous.x - fit.translation.x) * sf - unscaled_padding) / self.page.scale;
        let dy = ((previous.y - fit.translation.y) * sf - unscaled_padding) / self.page.scale;
        self.position = self.position.offset(dx, dy);

        tracing::debug!(
            editor = %self.id,
            width = fit.width,
            height = fit.height,
            tx = fit.translation.x,
            ty = fit.translation.y,
            "Fitted editor to content"
        );

        let mut events = vec![EditorEvent::RequestResize {
            width: fit.width,
            height: fit.height,
        }];
        if dx != 0.0 || dy != 0.0 {
            events.push(EditorEvent::Moved { dx, dy });
        }
        events.push(EditorEvent::RequestRedraw);
        events
    }

    /// Re-fits after the editor was loaded or re-attached.
    pub fn rebuild(&mut self) -> Vec<EditorEvent> {
        self.fit_to_content(false)
    }

    /// The host surface now measures `width` x `height` pixels. Locked
    /// editors rescale their content uniformly to the new size.
    pub fn on_surface_resized(&mut self, width: f64, height: f64) -> Vec<EditorEvent> {
        if width <= 0.0 || height <= 0.0 {
            tracing::debug!(editor = %self.id, width, height, "Resize ignored");
            return Vec::new();
        }
        if !self.surface_initialized {
            return Vec::new();
        }

        let size = SurfaceSize::new(width, height);
        if self.real_size == Some(size.rounded()) {
            return Vec::new();
        }

        let (base_width, base_height) = self.base_size;
        let rescale = self.state.is_locked && base_width > 0.0 && base_height > 0.0;
        let mut scale_factor = self.state.scale_factor;
        if rescale {
            let padding = self.padding();
            scale_factor = ((width - padding) / base_width).min((height - padding) / base_height);
            // A surface no larger than the padding leaves no room for content.
            if !(scale_factor.is_finite() && scale_factor > 0.0) {
                tracing::debug!(editor = %self.id, width, height, padding, "Resize ignored");
                return Vec::new();
            }
        }

        self.real_size = Some(size.rounded());
        self.surface = size;
        if rescale {
            self.state.scale_factor = scale_factor;
            tracing::trace!(editor = %self.id, scale_factor, "Rescaled");
        }
        vec![EditorEvent::RequestRedraw]
    }
}
