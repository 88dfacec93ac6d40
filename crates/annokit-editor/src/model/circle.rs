use annokit_core::{Point, ShapeKind};
use serde::{Deserialize, Serialize};

use super::{AnnotationShape, Bounds};

/// Circle defined by its center and a point on its rim.
///
/// The radius is always derived from the two points so the value used while
/// drawing and the value used after commit cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub center_x: f64,
    pub center_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl CircleShape {
    pub fn new(center: Point, end: Point) -> Self {
        Self {
            center_x: center.x,
            center_y: center.y,
            end_x: end.x,
            end_y: end.y,
        }
    }

    /// Circle with the rim point placed on the positive x axis.
    pub fn from_center_radius(center: Point, radius: f64) -> Self {
        Self::new(center, center.offset(radius, 0.0))
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    pub fn end(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }

    pub fn radius(&self) -> f64 {
        self.center().distance_to(&self.end())
    }
}

impl AnnotationShape for CircleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn bounds(&self, thickness: f64) -> Bounds {
        let reach = self.radius() + thickness / 2.0;
        Bounds::new(
            self.center_x - reach,
            self.center_y - reach,
            self.center_x + reach,
            self.center_y + reach,
        )
    }

    fn anchor(&self) -> Point {
        self.center()
    }

    fn is_degenerate(&self) -> bool {
        self.radius() == 0.0
    }
}

/// Circle centered on the drag start, passing through the drag end.
pub fn derive_circle(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> CircleShape {
    CircleShape {
        center_x: start_x,
        center_y: start_y,
        end_x,
        end_y,
    }
}
