use annokit_core::{Point, ShapeKind};
use serde::{Deserialize, Serialize};

use super::{AnnotationShape, Bounds};

/// Axis-aligned rectangle with a signed extent.
///
/// Negative width or height records that the drag went left or up from the
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

fn direction(extent: f64) -> f64 {
    if extent >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

impl RectShape {
    /// Rectangle spanning two corners, the first one being the origin.
    pub fn from_corners(start: Point, end: Point) -> Self {
        Self {
            origin_x: start.x,
            origin_y: start.y,
            width: end.x - start.x,
            height: end.y - start.y,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.origin_x, self.origin_y)
    }

    /// The corner opposite the origin.
    pub fn end(&self) -> Point {
        self.origin().offset(self.width, self.height)
    }

    /// Interior left once a stroke of `line_width` is drawn along the edges,
    /// as `(x, y, width, height)` keeping the sign of the extent.
    pub fn fill_rect(&self, line_width: f64) -> (f64, f64, f64, f64) {
        let sx = direction(self.width);
        let sy = direction(self.height);
        (
            self.origin_x + sx * line_width / 2.0,
            self.origin_y + sy * line_width / 2.0,
            self.width - sx * line_width,
            self.height - sy * line_width,
        )
    }
}

impl AnnotationShape for RectShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn bounds(&self, thickness: f64) -> Bounds {
        Bounds::from_corners(self.origin(), self.end()).expand(thickness / 2.0)
    }

    fn anchor(&self) -> Point {
        self.origin()
    }

    fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Rectangle from the drag start with the signed drag deltas as extent.
pub fn derive_rectangle(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> RectShape {
    RectShape::from_corners(Point::new(start_x, start_y), Point::new(end_x, end_y))
}
