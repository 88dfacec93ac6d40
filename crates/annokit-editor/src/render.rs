//! Rendering an editor onto a 2D surface.
//!
//! The editor only needs a handful of canvas-style primitives, captured by
//! [`RenderSurface`]. [`PixmapSurface`] implements them with tiny-skia for
//! hosts without a canvas of their own and for tests.

use annokit_core::Rgb;
use thiserror::Error;
use tiny_skia::{
    BlendMode, Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::editor::ShapeEditor;
use crate::model::ShapeRecord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSurfaceSize { width: u32, height: u32 },
}

/// Colour plus opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ink {
    pub color: Rgb,
    pub opacity: f64,
}

impl Ink {
    pub fn new(color: Rgb, opacity: f64) -> Self {
        Self { color, opacity }
    }
}

/// Drawing context supplied by the host. Rect extents may be negative.
pub trait RenderSurface {
    /// Current physical size in pixels.
    fn physical_size(&self) -> (f64, f64);
    /// Canvas matrix `(a, b, c, d, e, f)` applied to later draw calls.
    fn set_transform(&mut self, matrix: [f64; 6]);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, ink: Ink, line_width: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, ink: Ink);
    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, ink: Ink, line_width: f64);
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, ink: Ink);
}

const IDENTITY: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Redraws the whole editor: committed shapes first, then the draft.
pub fn render_editor<S: RenderSurface + ?Sized>(surface: &mut S, editor: &ShapeEditor) {
    let (width, height) = surface.physical_size();
    surface.set_transform(IDENTITY);
    surface.clear_rect(0.0, 0.0, width, height);
    surface.set_transform(editor.surface_transform().matrix());

    let style = editor.style();
    let stroke = Ink::new(style.stroke_color, style.stroke_opacity);
    let fill = Ink::new(style.fill_color, style.fill_opacity);
    let line_width = editor.line_width();

    let state = editor.state();
    for shape in state.shapes.iter().chain(state.current_draft.iter()) {
        match shape {
            ShapeRecord::Rectangle(rect) => {
                surface.stroke_rect(
                    rect.origin_x,
                    rect.origin_y,
                    rect.width,
                    rect.height,
                    stroke,
                    line_width,
                );
                let (x, y, w, h) = rect.fill_rect(line_width);
                surface.fill_rect(x, y, w, h, fill);
            }
            ShapeRecord::Circle(circle) => {
                let center = circle.center();
                let radius = circle.radius();
                surface.stroke_circle(
                    center.x,
                    center.y,
                    radius + line_width / 2.0,
                    stroke,
                    line_width,
                );
                surface.fill_circle(center.x, center.y, radius, fill);
            }
        }
    }
}

/// A [`RenderSurface`] backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
}

fn paint(ink: Ink) -> Paint<'static> {
    let (r, g, b) = (ink.color.r, ink.color.g, ink.color.b);
    let alpha = (ink.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba8(r, g, b, alpha));
    paint.anti_alias = true;
    paint
}

/// Rect with non-negative extent covering the same area.
fn normalized_rect(x: f64, y: f64, width: f64, height: f64) -> Option<Rect> {
    let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
    let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
    Rect::from_xywh(x as f32, y as f32, width as f32, height as f32)
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidSurfaceSize { width, height })?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
        })
    }

    /// A surface matching the editor's current surface size.
    pub fn for_editor(editor: &ShapeEditor) -> Result<Self, RenderError> {
        let size = editor.surface_size();
        Self::new(size.width.ceil() as u32, size.height.ceil() as u32)
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Demultiplied `(r, g, b, a)` of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some((c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn encode_png(&self) -> Option<Vec<u8>> {
        self.pixmap.encode_png().ok()
    }
}

impl RenderSurface for PixmapSurface {
    fn physical_size(&self) -> (f64, f64) {
        (self.pixmap.width() as f64, self.pixmap.height() as f64)
    }

    fn set_transform(&mut self, m: [f64; 6]) {
        self.transform = Transform::from_row(
            m[0] as f32,
            m[1] as f32,
            m[2] as f32,
            m[3] as f32,
            m[4] as f32,
            m[5] as f32,
        );
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if let Some(rect) = normalized_rect(x, y, width, height) {
            let mut paint = Paint::default();
            paint.blend_mode = BlendMode::Clear;
            self.pixmap.fill_rect(rect, &paint, self.transform, None);
        }
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, ink: Ink, line_width: f64) {
        let Some(rect) = normalized_rect(x, y, width, height) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        let stroke = Stroke {
            width: line_width as f32,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(ink), &stroke, self.transform, None);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, ink: Ink) {
        if let Some(rect) = normalized_rect(x, y, width, height) {
            self.pixmap.fill_rect(rect, &paint(ink), self.transform, None);
        }
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, ink: Ink, line_width: f64) {
        let Some(path) = PathBuilder::from_circle(cx as f32, cy as f32, radius as f32) else {
            return;
        };
        let stroke = Stroke {
            width: line_width as f32,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(ink), &stroke, self.transform, None);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, ink: Ink) {
        if let Some(path) = PathBuilder::from_circle(cx as f32, cy as f32, radius as f32) {
            self.pixmap
                .fill_path(&path, &paint(ink), FillRule::Winding, self.transform, None);
        }
    }
}
